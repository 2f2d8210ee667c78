//! Plain-text parser for riddle decks.
//!
//! # Format
//! ```text
//! # lines starting with '#' are comments
//! ID: 1
//! Q: FUNERAL
//! A: REAL FUN
//! O: FEAR RUN
//! O: FAR RUNE
//! O: EARL FUN
//! ```
//!
//! Each `ID:` line starts a new riddle. The answer is always included
//! as an option; `O:` lines add distractors.

use std::collections::HashSet;

use crate::error::{ParseError, Result};
use crate::types::Riddle;

/// Parse deck content into riddles.
pub fn parse(content: &str) -> Result<Vec<Riddle>> {
    let mut riddles = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut current: Option<RiddleBuilder> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("ID:") {
            if let Some(builder) = current.take() {
                push_riddle(builder, &mut riddles, &mut seen_ids)?;
            }
            let id = rest.trim();
            if id.is_empty() {
                return Err(ParseError::MissingId { line: line_num });
            }
            current = Some(RiddleBuilder::new(id.to_string(), line_num));
        } else if let Some(rest) = line.strip_prefix("Q:") {
            in_entry(&mut current, line_num)?.question = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("A:") {
            in_entry(&mut current, line_num)?.answer = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("O:") {
            in_entry(&mut current, line_num)?
                .distractors
                .push(rest.trim().to_string());
        }
        // Anything else is free text between entries; skip it.
    }

    if let Some(builder) = current.take() {
        push_riddle(builder, &mut riddles, &mut seen_ids)?;
    }

    if riddles.is_empty() {
        return Err(ParseError::EmptyDeck);
    }
    Ok(riddles)
}

struct RiddleBuilder {
    id: String,
    question: Option<String>,
    answer: Option<String>,
    distractors: Vec<String>,
    start_line: usize,
}

impl RiddleBuilder {
    fn new(id: String, start_line: usize) -> Self {
        Self {
            id,
            question: None,
            answer: None,
            distractors: Vec::new(),
            start_line,
        }
    }

    fn build(self) -> Result<Riddle> {
        let line = self.start_line;
        let question = self.question.ok_or(ParseError::MissingQuestion { line })?;
        let answer = self.answer.ok_or(ParseError::MissingAnswer { line })?;
        if question.is_empty() {
            return Err(ParseError::MissingQuestion { line });
        }
        if answer.is_empty() {
            return Err(ParseError::MissingAnswer { line });
        }

        let mut options = vec![answer.clone()];
        for distractor in self.distractors {
            if !distractor.is_empty() && !options.contains(&distractor) {
                options.push(distractor);
            }
        }
        if options.len() < 2 {
            return Err(ParseError::NotEnoughOptions { id: self.id, line });
        }

        Ok(Riddle {
            id: self.id,
            question,
            answer,
            options,
        })
    }
}

fn in_entry<'a>(
    current: &'a mut Option<RiddleBuilder>,
    line: usize,
) -> Result<&'a mut RiddleBuilder> {
    current.as_mut().ok_or(ParseError::MissingId { line })
}

fn push_riddle(
    builder: RiddleBuilder,
    riddles: &mut Vec<Riddle>,
    seen_ids: &mut HashSet<String>,
) -> Result<()> {
    let line = builder.start_line;
    let riddle = builder.build()?;
    if !seen_ids.insert(riddle.id.clone()) {
        return Err(ParseError::DuplicateId {
            id: riddle.id,
            line,
        });
    }
    riddles.push(riddle);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
# two riddles
ID: 1
Q: FUNERAL
A: REAL FUN
O: FEAR RUN
O: FAR RUNE

ID: 2
Q: DORMITORY
A: DIRTY ROOM
O: DO MIRROR
";

    #[test]
    fn parses_a_small_deck() {
        let riddles = parse(SAMPLE).unwrap();
        assert_eq!(riddles.len(), 2);
        assert_eq!(riddles[0].id, "1");
        assert_eq!(riddles[0].question, "FUNERAL");
        assert_eq!(riddles[0].answer, "REAL FUN");
        assert_eq!(
            riddles[0].options,
            vec!["REAL FUN", "FEAR RUN", "FAR RUNE"]
        );
    }

    #[test]
    fn answer_is_always_first_option_and_never_duplicated() {
        let deck = "ID: 1\nQ: THE EYES\nA: THEY SEE\nO: THEY SEE\nO: THE YES\n";
        let riddles = parse(deck).unwrap();
        assert_eq!(riddles[0].options, vec!["THEY SEE", "THE YES"]);
    }

    #[test]
    fn missing_answer_is_an_error() {
        let deck = "ID: 1\nQ: FUNERAL\nO: REAL FUN\n";
        let err = parse(deck).unwrap_err();
        assert!(matches!(err, ParseError::MissingAnswer { line: 1 }));
    }

    #[test]
    fn missing_question_is_an_error() {
        let deck = "ID: 1\nA: REAL FUN\nO: FEAR RUN\n";
        let err = parse(deck).unwrap_err();
        assert!(matches!(err, ParseError::MissingQuestion { line: 1 }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let deck = "\
ID: 1
Q: FUNERAL
A: REAL FUN
O: FEAR RUN
ID: 1
Q: DORMITORY
A: DIRTY ROOM
O: DRY MOTOR
";
        let err = parse(deck).unwrap_err();
        assert!(matches!(err, ParseError::DuplicateId { line: 5, .. }));
    }

    #[test]
    fn riddle_without_distractors_is_rejected() {
        let deck = "ID: 1\nQ: FUNERAL\nA: REAL FUN\n";
        let err = parse(deck).unwrap_err();
        assert!(matches!(err, ParseError::NotEnoughOptions { line: 1, .. }));
    }

    #[test]
    fn fields_before_any_id_are_rejected() {
        let deck = "Q: FUNERAL\nA: REAL FUN\n";
        let err = parse(deck).unwrap_err();
        assert!(matches!(err, ParseError::MissingId { line: 1 }));
    }

    #[test]
    fn empty_content_is_an_empty_deck() {
        assert!(matches!(parse("").unwrap_err(), ParseError::EmptyDeck));
        assert!(matches!(
            parse("# nothing here\n\n").unwrap_err(),
            ParseError::EmptyDeck
        ));
    }
}
