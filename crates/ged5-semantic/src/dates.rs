//! `DATE` values.
//!
//! A date value is an optional qualifier keyword followed by one or two
//! calendar expressions. Each calendar point is stored under the keyword
//! that introduced it (`ACT` for an unqualified date), so a range such as
//! `BET 1900 AND 1910` yields points keyed `BET` and `AND`.

use std::fmt;

use chrono::Datelike;
use chrono::NaiveDate;
use ged5_syntax::NodeRef;
use ged5_syntax::Tag;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Qualifier {
    Actual,
    Before,
    After,
    About,
    Calculated,
    Estimated,
    FromTo,
    Between,
}

impl Qualifier {
    /// The keyword that opens the value, and keys its primary point.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Qualifier::Actual => "ACT",
            Qualifier::Before => "BEF",
            Qualifier::After => "AFT",
            Qualifier::About => "ABT",
            Qualifier::Calculated => "CAL",
            Qualifier::Estimated => "EST",
            Qualifier::FromTo => "FROM",
            Qualifier::Between => "BET",
        }
    }

    /// The keyword that must follow the first point of a range.
    #[must_use]
    pub fn closing(self) -> Option<&'static str> {
        match self {
            Qualifier::FromTo => Some("TO"),
            Qualifier::Between => Some("AND"),
            _ => None,
        }
    }

    fn leading(word: &str) -> Option<Self> {
        match word {
            "BEF" => Some(Qualifier::Before),
            "AFT" => Some(Qualifier::After),
            "ABT" => Some(Qualifier::About),
            "CAL" => Some(Qualifier::Calculated),
            "EST" => Some(Qualifier::Estimated),
            "FROM" => Some(Qualifier::FromTo),
            "BET" => Some(Qualifier::Between),
            _ => None,
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A calendar date with the precision it was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CalendarPoint {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl CalendarPoint {
    /// Parses `DD MON YYYY`, `DD MON YY`, `MON YYYY`, `MON YY`, `YYYY` or `YY`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        Self::from_tokens(&tokens)
    }

    fn from_tokens(tokens: &[&str]) -> Option<Self> {
        match *tokens {
            [day, month, year] if is_day(day) && is_month(month) && is_year(year) => {
                let date = calendar(day, month, year)?;
                Some(CalendarPoint {
                    year: date.year(),
                    month: Some(date.month()),
                    day: Some(date.day()),
                })
            }
            [month, year] if is_month(month) && is_year(year) => {
                let date = calendar("1", month, year)?;
                Some(CalendarPoint {
                    year: date.year(),
                    month: Some(date.month()),
                    day: None,
                })
            }
            [year] if is_year(year) => {
                let date = calendar("1", "JAN", year)?;
                Some(CalendarPoint {
                    year: date.year(),
                    month: None,
                    day: None,
                })
            }
            _ => None,
        }
    }

    /// The first day the point covers.
    #[must_use]
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }
}

fn is_day(token: &str) -> bool {
    (1..=2).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_digit())
}

fn is_month(token: &str) -> bool {
    token.len() == 3 && token.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_year(token: &str) -> bool {
    matches!(token.len(), 2 | 4) && token.bytes().all(|b| b.is_ascii_digit())
}

fn calendar(day: &str, month: &str, year: &str) -> Option<NaiveDate> {
    let format = if year.len() == 4 {
        "%d %b %Y"
    } else {
        "%d %b %y"
    };
    NaiveDate::parse_from_str(&format!("{day} {month} {year}"), format).ok()
}

/// A parsed `DATE` value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DateValue {
    qualifier: Option<Qualifier>,
    points: Vec<(&'static str, CalendarPoint)>,
}

impl DateValue {
    /// Parses a date value. A range missing its closing keyword has no
    /// qualifier and no points.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let upper = text.to_uppercase();
        let parts: Vec<&str> = upper.split_whitespace().collect();

        let Some(qualifier) = parts.first().and_then(|first| Qualifier::leading(first)) else {
            return Self::single(Qualifier::Actual, &parts);
        };
        let rest = &parts[1..];

        let Some(closing) = qualifier.closing() else {
            return Self::single(qualifier, rest);
        };
        let Some(index) = rest.iter().position(|word| *word == closing) else {
            tracing::trace!(text, closing, "date range without closing keyword");
            return DateValue::default();
        };

        let mut value = DateValue {
            qualifier: Some(qualifier),
            points: Vec::with_capacity(2),
        };
        value.push(qualifier.keyword(), &rest[..index]);
        value.push(closing, &rest[index + 1..]);
        value
    }

    /// The date carried by `node`: the node itself when it is a `DATE`,
    /// otherwise its typed `DATE` child.
    #[must_use]
    pub fn of(node: NodeRef<'_>) -> Option<Self> {
        let date = if node.tag() == Some(Tag::Date) {
            node
        } else {
            node.slot(node.fields().date())?
        };
        Some(date.value().map_or_else(DateValue::default, DateValue::parse))
    }

    fn single(qualifier: Qualifier, tokens: &[&str]) -> Self {
        let mut value = DateValue {
            qualifier: Some(qualifier),
            points: Vec::with_capacity(1),
        };
        value.push(qualifier.keyword(), tokens);
        value
    }

    fn push(&mut self, keyword: &'static str, tokens: &[&str]) {
        if let Some(point) = CalendarPoint::from_tokens(tokens) {
            self.points.push((keyword, point));
        }
    }

    #[must_use]
    pub fn qualifier(&self) -> Option<Qualifier> {
        self.qualifier
    }

    /// The point introduced by `keyword`, e.g. `"FROM"` or `"AND"`.
    #[must_use]
    pub fn point(&self, keyword: &str) -> Option<CalendarPoint> {
        self.points
            .iter()
            .find(|(key, _)| *key == keyword)
            .map(|(_, point)| *point)
    }

    pub fn points(&self) -> impl Iterator<Item = (&'static str, CalendarPoint)> + '_ {
        self.points.iter().copied()
    }

    /// The point keyed by the qualifier's own keyword.
    #[must_use]
    pub fn primary(&self) -> Option<CalendarPoint> {
        self.point(self.qualifier?.keyword())
    }

    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.primary().map(|point| point.year)
    }

    #[must_use]
    pub fn month(&self) -> Option<u32> {
        self.primary().map(|point| point.month.unwrap_or(1))
    }

    #[must_use]
    pub fn day(&self) -> Option<u32> {
        self.primary().map(|point| point.day.unwrap_or(1))
    }

    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.primary()?.to_naive_date()
    }
}

#[cfg(test)]
mod tests {
    use ged5_syntax::parse;

    use super::*;

    fn ymd(value: &DateValue) -> (Option<i32>, Option<u32>, Option<u32>) {
        (value.year(), value.month(), value.day())
    }

    mod calendar {
        use super::*;

        #[test]
        fn test_full_date() {
            let value = DateValue::parse("13 NOV 1969");
            assert_eq!(value.qualifier(), Some(Qualifier::Actual));
            assert_eq!(ymd(&value), (Some(1969), Some(11), Some(13)));
            assert_eq!(value.date(), NaiveDate::from_ymd_opt(1969, 11, 13));
        }

        #[test]
        fn test_month_and_year_default_the_day() {
            let value = DateValue::parse("NOV 1969");
            assert_eq!(ymd(&value), (Some(1969), Some(11), Some(1)));
            assert_eq!(
                value.primary(),
                Some(CalendarPoint {
                    year: 1969,
                    month: Some(11),
                    day: None,
                })
            );
        }

        #[test]
        fn test_year_only_defaults_month_and_day() {
            let value = DateValue::parse("1969");
            assert_eq!(ymd(&value), (Some(1969), Some(1), Some(1)));
            assert_eq!(value.primary().unwrap().month, None);
        }

        #[test]
        fn test_lower_case_is_accepted() {
            assert_eq!(ymd(&DateValue::parse("13 nov 1969")), (Some(1969), Some(11), Some(13)));
        }

        #[test]
        fn test_two_digit_years() {
            assert_eq!(DateValue::parse("85").year(), Some(1985));
            assert_eq!(DateValue::parse("05").year(), Some(2005));
            assert_eq!(ymd(&DateValue::parse("2 JAN 85")), (Some(1985), Some(1), Some(2)));
            assert_eq!(DateValue::parse("MAR 05").year(), Some(2005));
        }

        #[test]
        fn test_impossible_day_is_absent() {
            let value = DateValue::parse("31 FEB 1969");
            assert_eq!(value.qualifier(), Some(Qualifier::Actual));
            assert_eq!(ymd(&value), (None, None, None));
        }

        #[test]
        fn test_unrecognized_text_is_absent() {
            for text in ["XXX", "", "13 NOVEMBER 1969", "1969 NOV 13", "196", "@#DJULIAN@ 1969"] {
                let value = DateValue::parse(text);
                assert_eq!(ymd(&value), (None, None, None), "{text:?}");
                assert_eq!(value.points().count(), 0, "{text:?}");
            }
        }

        #[test]
        fn test_extra_spaces_are_ignored() {
            assert_eq!(DateValue::parse(" 13  NOV 1969 ").year(), Some(1969));
        }
    }

    mod qualifiers {
        use super::*;

        #[test]
        fn test_single_point_qualifiers() {
            for (text, qualifier) in [
                ("BEF 13 NOV 1969", Qualifier::Before),
                ("AFT 13 NOV 1969", Qualifier::After),
                ("ABT 13 NOV 1969", Qualifier::About),
                ("CAL 13 NOV 1969", Qualifier::Calculated),
                ("EST 13 NOV 1969", Qualifier::Estimated),
            ] {
                let value = DateValue::parse(text);
                assert_eq!(value.qualifier(), Some(qualifier));
                assert_eq!(ymd(&value), (Some(1969), Some(11), Some(13)));
                assert_eq!(value.point(qualifier.keyword()), value.primary());
                assert_eq!(value.point("ACT"), None);
            }
        }

        #[test]
        fn test_qualifier_without_date() {
            let value = DateValue::parse("BEF");
            assert_eq!(value.qualifier(), Some(Qualifier::Before));
            assert_eq!(value.year(), None);
        }

        #[test]
        fn test_keywords_display() {
            assert_eq!(Qualifier::FromTo.to_string(), "FROM");
            assert_eq!(Qualifier::Between.closing(), Some("AND"));
            assert_eq!(Qualifier::Actual.closing(), None);
        }
    }

    mod ranges {
        use super::*;

        #[test]
        fn test_from_to() {
            let value = DateValue::parse("FROM 13 NOV 1969 TO 14 DEC 1970");
            assert_eq!(value.qualifier(), Some(Qualifier::FromTo));
            assert_eq!(value.point("FROM").unwrap().to_naive_date(), NaiveDate::from_ymd_opt(1969, 11, 13));
            assert_eq!(value.point("TO").unwrap().to_naive_date(), NaiveDate::from_ymd_opt(1970, 12, 14));
            assert_eq!(ymd(&value), (Some(1969), Some(11), Some(13)));
        }

        #[test]
        fn test_from_without_to_has_no_date() {
            let value = DateValue::parse("FROM 01 NOV 1969");
            assert_eq!(value, DateValue::default());
            assert_eq!(value.year(), None);
            assert_eq!(value.qualifier(), None);
        }

        #[test]
        fn test_between_and() {
            let value = DateValue::parse("BET 1900 AND MAR 1910");
            assert_eq!(value.qualifier(), Some(Qualifier::Between));
            assert_eq!(value.year(), Some(1900));
            assert_eq!(value.point("AND").unwrap().month, Some(3));
            assert_eq!(
                value.points().map(|(key, _)| key).collect::<Vec<_>>(),
                ["BET", "AND"]
            );
        }

        #[test]
        fn test_between_without_and_has_no_date() {
            assert_eq!(DateValue::parse("BET 1900"), DateValue::default());
        }

        #[test]
        fn test_unparsable_half_is_absent() {
            let value = DateValue::parse("FROM 1969 TO SOMETIME");
            assert_eq!(value.year(), Some(1969));
            assert_eq!(value.point("TO"), None);

            let value = DateValue::parse("BET XXX AND 1970");
            assert_eq!(value.qualifier(), Some(Qualifier::Between));
            assert_eq!(value.year(), None);
            assert_eq!(value.point("AND").unwrap().year, 1970);
        }
    }

    mod nodes {
        use super::*;

        #[test]
        fn test_of_event_and_date_node() {
            let document = parse(
                "0 @I1@ INDI\n1 BIRT\n2 DATE ABT 1850\n1 DEAT\n2 PLAC Here\n1 NAME Bob",
                true,
            )
            .unwrap();
            let birt = document.find_first("INDI.BIRT").unwrap();
            let date = DateValue::of(birt).unwrap();
            assert_eq!(date.qualifier(), Some(Qualifier::About));
            assert_eq!(date.year(), Some(1850));

            let node = document.find_first("INDI.BIRT.DATE").unwrap();
            assert_eq!(DateValue::of(node), Some(date));

            assert_eq!(DateValue::of(document.find_first("INDI.DEAT").unwrap()), None);
            assert_eq!(DateValue::of(document.find_first("INDI.NAME").unwrap()), None);
        }

        #[test]
        fn test_of_date_without_value() {
            let document = parse("0 @I1@ INDI\n1 BIRT\n2 DATE", true).unwrap();
            let date = DateValue::of(document.find_first("INDI.BIRT").unwrap()).unwrap();
            assert_eq!(date, DateValue::default());
        }
    }
}
