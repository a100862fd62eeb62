//! fOS HTML Parser
//!
//! HTML5 parser built on html5ever, producing `fos_dom` documents.
//! Declarative shadow roots (`<template shadowrootmode>`) are attached
//! to their parent element while converting.

mod parser;

pub use fos_dom::{Document, NodeId};
pub use parser::HtmlParser;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build tree: {0}")]
    Dom(#[from] fos_dom::DomError),
}
