use chrono::{TimeZone, Utc};

use crate::models::{QuestionDraft, QuizDraft};

use super::CatalogEntry;

fn entry(
    date: (i32, u32, u32),
    title: &str,
    description: &str,
    created_by: &str,
    questions: Vec<QuestionDraft>,
) -> CatalogEntry {
    let (year, month, day) = date;
    CatalogEntry {
        id: None,
        created_at: Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single(),
        draft: QuizDraft {
            title: title.to_string(),
            description: description.to_string(),
            created_by: created_by.to_string(),
            questions,
        },
    }
}

pub(super) fn seed_entries() -> Vec<CatalogEntry> {
    vec![
        entry(
            (2023, 7, 15),
            "Web Development Basics",
            "Test your knowledge of HTML, CSS, and JavaScript fundamentals.",
            "user1",
            vec![
                QuestionDraft::new(
                    "What does HTML stand for?",
                    vec![
                        "Hyper Text Markup Language",
                        "High Technology Modern Language",
                        "Hyper Transfer Markup Language",
                        "Hyperlink Text Management Language",
                    ],
                    0,
                ),
                QuestionDraft::new(
                    "Which of the following is used for styling web pages?",
                    vec!["HTML", "CSS", "JavaScript", "PHP"],
                    1,
                ),
                QuestionDraft::new(
                    "Which of the following is NOT a JavaScript framework?",
                    vec!["React", "Angular", "Vue", "Laravel"],
                    3,
                ),
            ],
        ),
        entry(
            (2023, 6, 20),
            "Science Quiz: Astronomy",
            "Explore the wonders of our solar system and beyond.",
            "user2",
            vec![
                QuestionDraft::new(
                    "Which is the closest planet to the Sun?",
                    vec!["Venus", "Mercury", "Earth", "Mars"],
                    1,
                ),
                QuestionDraft::new(
                    "What is the name of our galaxy?",
                    vec!["Andromeda", "Milky Way", "Triangulum", "Sombrero"],
                    1,
                ),
                QuestionDraft::new(
                    "What is a light-year?",
                    vec![
                        "The time it takes for light to travel from the Sun to Earth",
                        "The distance light travels in one year",
                        "The time it takes for Earth to orbit the Sun",
                        "The brightness of a star",
                    ],
                    1,
                ),
            ],
        ),
        entry(
            (2023, 5, 10),
            "History: Ancient Civilizations",
            "Test your knowledge about ancient cultures and empires.",
            "user3",
            vec![
                QuestionDraft::new(
                    "Which ancient civilization built the pyramids of Giza?",
                    vec!["Romans", "Greeks", "Egyptians", "Mayans"],
                    2,
                ),
                QuestionDraft::new(
                    "Who was the first Emperor of Rome?",
                    vec!["Julius Caesar", "Augustus", "Nero", "Constantine"],
                    1,
                ),
                QuestionDraft::new(
                    "Which of these was NOT an ancient Mesopotamian civilization?",
                    vec!["Sumerians", "Akkadians", "Athenians", "Babylonians"],
                    2,
                ),
            ],
        ),
        entry(
            (2023, 4, 5),
            "Mathematics Challenge",
            "Put your math skills to the test with these problems.",
            "user1",
            vec![
                QuestionDraft::new(
                    "What is the value of π (pi) to two decimal places?",
                    vec!["3.41", "3.14", "3.12", "3.18"],
                    1,
                ),
                QuestionDraft::new(
                    "What is the Pythagorean theorem?",
                    vec!["a² + b² = c²", "E = mc²", "a² - b² = c²", "F = ma"],
                    0,
                ),
                QuestionDraft::new(
                    "What is the next number in the sequence: 1, 1, 2, 3, 5, 8, ...?",
                    vec!["11", "13", "14", "15"],
                    0,
                ),
            ],
        ),
    ]
}
