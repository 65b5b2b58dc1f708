pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

pub use html::ContentExtractor;

use crate::config::HarvestConfig;
use crate::error::ConfigError;

/// How the clean stage turns raw HTML into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserType {
    /// Prune noise elements and read the main content region
    MainContent,
    /// Drop anything tag-shaped without parsing the document
    StripTags,
}

/// Cleans raw HTML into plain text for persistence
#[derive(Debug, Clone)]
pub struct Parser {
    extractor: ContentExtractor,
    parser_type: ParserType,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ContentExtractor::default(), ParserType::MainContent)
    }
}

impl Parser {
    pub fn new(extractor: ContentExtractor, parser_type: ParserType) -> Self {
        Self {
            extractor,
            parser_type,
        }
    }

    /// Build a parser from the run configuration
    pub fn from_config(config: &HarvestConfig) -> Result<Self, ConfigError> {
        let extractor = ContentExtractor::new(&config.main_selectors)?;
        let parser_type = if config.strip_only {
            ParserType::StripTags
        } else {
            ParserType::MainContent
        };
        Ok(Self::new(extractor, parser_type))
    }

    pub fn parser_type(&self) -> ParserType {
        self.parser_type
    }

    /// Clean a page according to the parser type
    pub fn parse(&self, html: &str) -> String {
        match self.parser_type {
            ParserType::MainContent => self.extractor.extract(html),
            ParserType::StripTags => text::strip_tags(html),
        }
    }
}
