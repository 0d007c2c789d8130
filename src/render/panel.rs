//! Statistics panel: the summary cards plus an optional footnote.

use crate::domain::forecast::DisplayCard;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsPanel {
    pub cards: Vec<DisplayCard>,
    pub footnote: Option<String>,
}

impl StatsPanel {
    pub fn new(cards: &[DisplayCard]) -> Self {
        Self {
            cards: cards.to_vec(),
            footnote: None,
        }
    }

    pub fn with_footnote(mut self, footnote: impl Into<String>) -> Self {
        self.footnote = Some(footnote.into());
        self
    }
}

impl fmt::Display for StatsPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{:<24} {}", card.label, card.value)?;
            if let Some(sub) = &card.sub {
                write!(f, " ({})", sub)?;
            }
            writeln!(f)?;
        }
        if let Some(note) = &self.footnote {
            writeln!(f, "{}", note)?;
        }
        Ok(())
    }
}
