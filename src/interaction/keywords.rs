//! Keyword triggered canned responses.
//!
//! Each keyword maps to a function that produces the response when, and only
//! when, the keyword matches.

use crate::base::phrases;

/// Context handed to keyword response functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordContext {
    /// Current calendar month, `1..=12`.
    pub month: u32,
}

/// Produces a response for a matched keyword, or `None` to stay quiet.
pub type ResponseFn = fn(&KeywordContext) -> Option<String>;

/// Ordered keyword to response function table.
#[derive(Clone)]
pub struct KeywordTable {
    entries: Vec<(&'static str, ResponseFn)>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self {
            entries: vec![
                ("cake", cake as ResponseFn),
                ("christmas", seasonal as ResponseFn),
                ("xmas", seasonal as ResponseFn),
                ("santa", seasonal as ResponseFn),
            ],
        }
    }
}

impl KeywordTable {
    pub fn new(entries: Vec<(&'static str, ResponseFn)>) -> Self {
        Self { entries }
    }

    /// Finds the response for the first keyword in the table that appears in `text`.
    ///
    /// Keywords whose function yields nothing are skipped.
    pub fn respond(&self, text: &str, context: &KeywordContext) -> Option<String> {
        let text = text.to_lowercase();

        self.entries.iter().filter(|(keyword, _)| text.contains(keyword)).find_map(|(_, response)| response(context))
    }
}

fn cake(_: &KeywordContext) -> Option<String> {
    Some(phrases::CAKE_RESPONSE.to_string())
}

/// Christmas talk outside December gets a warning.
///
/// In December the bot deliberately says nothing.
fn seasonal(context: &KeywordContext) -> Option<String> {
    if context.month == 12 {
        return None;
    }

    Some(phrases::OUT_OF_SEASON_WARNING.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const JUNE: KeywordContext = KeywordContext { month: 6 };
    const DECEMBER: KeywordContext = KeywordContext { month: 12 };

    #[test]
    fn cake_gets_baker_street() {
        let table = KeywordTable::default();

        assert_eq!(table.respond("Who brought the CAKE?", &JUNE).as_deref(), Some("Baker Street!?"));
        assert_eq!(table.respond("cupcakes for everyone", &DECEMBER).as_deref(), Some("Baker Street!?"));
    }

    #[test]
    fn christmas_out_of_season_is_flagged() {
        let table = KeywordTable::default();

        for text in ["Christmas plans?", "xmas party", "is Santa real"] {
            assert_eq!(table.respond(text, &JUNE).as_deref(), Some(phrases::OUT_OF_SEASON_WARNING));
        }
    }

    #[test]
    fn christmas_in_december_is_quiet() {
        let table = KeywordTable::default();

        for text in ["Christmas plans?", "xmas party", "is Santa real"] {
            assert_eq!(table.respond(text, &DECEMBER), None);
        }
    }

    #[test]
    fn table_order_decides_between_keywords() {
        let table = KeywordTable::default();

        assert_eq!(table.respond("santa ate the cake", &JUNE).as_deref(), Some("Baker Street!?"));
        assert_eq!(table.respond("a christmas cake in december", &DECEMBER).as_deref(), Some("Baker Street!?"));
    }

    #[test]
    fn quiet_entries_fall_through_to_later_ones() {
        fn never(_: &KeywordContext) -> Option<String> {
            None
        }
        fn always(_: &KeywordContext) -> Option<String> {
            Some("second".to_string())
        }

        let table = KeywordTable::new(vec![("tea", never as ResponseFn), ("tea", always as ResponseFn)]);

        assert_eq!(table.respond("tea time", &JUNE).as_deref(), Some("second"));
    }

    #[test]
    fn unrelated_text_gets_nothing() {
        assert_eq!(KeywordTable::default().respond("nothing to see here", &JUNE), None);
    }
}
