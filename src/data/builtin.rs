use crate::models::{PrizeLadder, Question};

use super::Content;

const PRIZES: [&str; 15] = [
    "₹100",
    "₹200",
    "₹300",
    "₹500",
    "₹1,000",
    "₹2,000",
    "₹4,000",
    "₹8,000",
    "₹16,000",
    "₹32,000",
    "₹64,000",
    "₹1,25,000",
    "₹2,50,000",
    "₹5,00,000",
    "₹1,00,00,000",
];

fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "Which planet is known as the Red Planet?",
            ["Earth", "Mars", "Venus", "Jupiter"],
            1,
        ),
        Question::new(
            "Who is known as the father of computers?",
            ["Nikola Tesla", "Charles Babbage", "Thomas Edison", "Alan Turing"],
            1,
        ),
        Question::new(
            "What is the national animal of India?",
            ["Lion", "Peacock", "Tiger", "Elephant"],
            2,
        ),
        Question::new(
            "Which gas do plants absorb from the atmosphere?",
            ["Oxygen", "Nitrogen", "Carbon Dioxide", "Helium"],
            2,
        ),
        Question::new(
            "How many continents are there on Earth?",
            ["5", "6", "7", "8"],
            2,
        ),
        Question::new(
            "Which is the largest ocean on Earth?",
            ["Atlantic", "Indian", "Pacific", "Arctic"],
            2,
        ),
        Question::new(
            "Who wrote 'Romeo and Juliet'?",
            ["Charles Dickens", "William Shakespeare", "Mark Twain", "Leo Tolstoy"],
            1,
        ),
        Question::new(
            "What is H2O commonly known as?",
            ["Salt", "Water", "Hydrogen Peroxide", "Ozone"],
            1,
        ),
        Question::new(
            "Which instrument measures temperature?",
            ["Barometer", "Hygrometer", "Thermometer", "Voltmeter"],
            2,
        ),
        Question::new(
            "Which metal is liquid at room temperature?",
            ["Iron", "Mercury", "Gold", "Aluminium"],
            1,
        ),
        Question::new(
            "Which country is known as the Land of the Rising Sun?",
            ["China", "Japan", "Thailand", "India"],
            1,
        ),
        Question::new(
            "Which element has the chemical symbol 'O'?",
            ["Gold", "Oxygen", "Osmium", "Silver"],
            1,
        ),
        Question::new(
            "Which is the fastest land animal?",
            ["Lion", "Cheetah", "Tiger", "Leopard"],
            1,
        ),
        Question::new(
            "Which organ pumps blood through the body?",
            ["Lungs", "Liver", "Heart", "Kidneys"],
            2,
        ),
        Question::new(
            "Which planet is the largest in our solar system?",
            ["Saturn", "Jupiter", "Neptune", "Earth"],
            1,
        ),
    ]
}

/// The default fifteen questions and their rupee ladder.
pub fn builtin_content() -> Content {
    Content::new(questions(), PrizeLadder::new(PRIZES))
        .unwrap_or_else(|err| unreachable!("built-in questions are malformed: {err}"))
}
