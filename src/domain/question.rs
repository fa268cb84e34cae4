use crate::domain::content::Contents;
use crate::domain::media::MediaRef;
use crate::utils::error::{PackError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub price: i64,
    question: Contents,
    answer: String,
    answer_content: Contents,
}

impl Question {
    /// 建立題目；題目內容至少要有一項
    pub fn new(
        price: i64,
        question: impl Into<Contents>,
        answer: impl Into<String>,
    ) -> Result<Self> {
        let question = question.into();
        let answer = answer.into();
        if question.is_empty() {
            return Err(PackError::EmptyQuestionContent { answer });
        }
        Ok(Self {
            price,
            question,
            answer,
            answer_content: Contents::empty(),
        })
    }

    /// Attaches content that illustrates the answer (shown after it is revealed).
    pub fn with_answer_content(mut self, content: impl Into<Contents>) -> Self {
        self.answer_content = content.into();
        self
    }

    pub fn question(&self) -> &Contents {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn answer_content(&self) -> &Contents {
        &self.answer_content
    }

    /// Question media first, then answer media.
    pub fn collect_media(&self) -> impl Iterator<Item = &MediaRef> {
        self.question.media().chain(self.answer_content.media())
    }

    pub fn scale_price(&mut self, factor: i64) {
        self.price = self.price.saturating_mul(factor);
    }

    /// Divides the price, truncating toward zero.
    pub fn shrink_price(&mut self, divisor: i64) -> Result<()> {
        if divisor == 0 {
            return Err(PackError::InvalidDivisor);
        }
        self.price = self.price.saturating_div(divisor);
        Ok(())
    }
}
