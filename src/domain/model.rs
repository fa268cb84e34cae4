use crate::domain::media::MediaRef;
use crate::domain::question::Question;
use crate::utils::error::{PackError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Theme {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    pub fn collect_media(&self) -> impl Iterator<Item = &MediaRef> {
        self.questions.iter().flat_map(|question| question.collect_media())
    }

    pub fn scale_price(&mut self, factor: i64) {
        for question in &mut self.questions {
            question.scale_price(factor);
        }
    }

    pub fn shrink_price(&mut self, divisor: i64) -> Result<()> {
        if divisor == 0 {
            return Err(PackError::InvalidDivisor);
        }
        for question in &mut self.questions {
            question.shrink_price(divisor)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub name: String,
    pub themes: Vec<Theme>,
    /// 最終回合：檢視器不顯示價格
    pub is_final: bool,
}

impl Round {
    pub fn new(name: impl Into<String>, themes: Vec<Theme>) -> Self {
        Self {
            name: name.into(),
            themes,
            is_final: false,
        }
    }

    pub fn final_round(name: impl Into<String>, themes: Vec<Theme>) -> Self {
        Self {
            is_final: true,
            ..Self::new(name, themes)
        }
    }

    pub fn collect_media(&self) -> impl Iterator<Item = &MediaRef> {
        self.themes.iter().flat_map(|theme| theme.collect_media())
    }

    pub fn scale_price(&mut self, factor: i64) {
        for theme in &mut self.themes {
            theme.scale_price(factor);
        }
    }

    pub fn shrink_price(&mut self, divisor: i64) -> Result<()> {
        if divisor == 0 {
            return Err(PackError::InvalidDivisor);
        }
        for theme in &mut self.themes {
            theme.shrink_price(divisor)?;
        }
        Ok(())
    }
}

/// Root of a quiz package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    pub name: String,
    pub tag: String,
    pub author: String,
    pub rounds: Vec<Round>,
}

impl Pack {
    pub fn new(
        name: impl Into<String>,
        tag: impl Into<String>,
        author: impl Into<String>,
        rounds: Vec<Round>,
    ) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            author: author.into(),
            rounds,
        }
    }

    pub fn collect_media(&self) -> impl Iterator<Item = &MediaRef> {
        self.rounds.iter().flat_map(|round| round.collect_media())
    }

    /// Multiplies every question price in the pack.
    pub fn scale_price(&mut self, factor: i64) {
        for round in &mut self.rounds {
            round.scale_price(factor);
        }
    }

    /// Inverse of [`Pack::scale_price`]; prices are truncated toward zero.
    pub fn shrink_price(&mut self, divisor: i64) -> Result<()> {
        if divisor == 0 {
            return Err(PackError::InvalidDivisor);
        }
        for round in &mut self.rounds {
            round.shrink_price(divisor)?;
        }
        Ok(())
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.rounds
            .iter()
            .flat_map(|round| round.themes.iter())
            .flat_map(|theme| theme.questions.iter())
    }
}
