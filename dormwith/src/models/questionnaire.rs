//! Lifestyle questionnaire that feeds the viewer's matching preferences.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DormError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub title: &'static str,
    pub options: &'static [&'static str],
}

pub const QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        title: "기상 시간",
        options: &["아침형", "저녁형", "유동적"],
    },
    Question {
        id: 2,
        title: "청결 선호",
        options: &["매일 정리", "주기적 정리", "크게 신경 안 씀"],
    },
    Question {
        id: 3,
        title: "소음 허용",
        options: &["조용한 편", "보통", "상관없음"],
    },
    Question {
        id: 4,
        title: "취침 시간",
        options: &["22-24시", "0-2시", "2시 이후"],
    },
    Question {
        id: 5,
        title: "식습관",
        options: &["기숙사 내 취식", "외부 취식 위주", "혼합"],
    },
    Question {
        id: 6,
        title: "흡연 여부",
        options: &["비흡연", "흡연", "상관없음"],
    },
    Question {
        id: 7,
        title: "음주 빈도",
        options: &["안 마심", "가끔 마심", "자주 마심"],
    },
    Question {
        id: 8,
        title: "성격",
        options: &["배려형", "외향적", "조용한 편"],
    },
    Question {
        id: 9,
        title: "스터디 패턴",
        options: &["기숙사 공부", "도서관", "카페", "학교"],
    },
    Question {
        id: 10,
        title: "활동 스타일",
        options: &["운동 즐김", "집콕", "취미 외출"],
    },
];

pub const INCOMPLETE_ANSWERS: &str = "모든 질문에 답변해 주세요.";

const TAG_SEPARATOR: &str = " • ";
const TAG_ANSWER_COUNT: usize = 3;

/// Saved questionnaire answers plus the tag line derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingPreferences {
    pub answers: BTreeMap<u32, String>,
    pub tags: String,
}

impl MatchingPreferences {
    /// Validate a full answer sheet.
    ///
    /// Every question must be answered with one of its own options. The tag
    /// line is the first three answers in question order.
    pub fn from_answers(answers: BTreeMap<u32, String>) -> Result<Self> {
        for (id, answer) in &answers {
            let question = QUESTIONS
                .iter()
                .find(|q| q.id == *id)
                .ok_or_else(|| DormError::Validation(format!("Unknown question id: {id}")))?;
            if !question.options.contains(&answer.as_str()) {
                return Err(DormError::Validation(format!(
                    "'{answer}' is not an option for question {id} ({})",
                    question.title
                )));
            }
        }

        if answers.len() < QUESTIONS.len() {
            return Err(DormError::Validation(INCOMPLETE_ANSWERS.to_string()));
        }

        let tags = answers
            .values()
            .take(TAG_ANSWER_COUNT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(TAG_SEPARATOR);

        Ok(Self { answers, tags })
    }
}
