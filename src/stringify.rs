use crate::common::UInt;
use crate::roll::RollResult;

/// Renders a finished roll for display.
#[enum_dispatch::enum_dispatch]
pub trait Stringify {
    fn stringify(&self, result: &RollResult) -> String;
}

/// Plain text: `2d20: [14, 9]→14 (Advantage) = 14`.
#[derive(Default, Debug, Copy, Clone)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self
    }
}

impl Stringify for SimpleStringifier {
    fn stringify(&self, result: &RollResult) -> String {
        format!("{}: {}", result.formula(), result.breakdown())
    }
}

/// Markdown for chat: dropped dice are struck out, natural ones and maximum
/// faces are bold, and the total is set in code.
#[derive(Default, Debug, Copy, Clone)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self
    }

    fn fmt_die(face: UInt, sides: UInt, kept: bool) -> String {
        let ret = if face == 1 || face == sides {
            format!("**{}**", face)
        } else {
            face.to_string()
        };
        if kept {
            ret
        } else {
            format!("~~{}~~", ret)
        }
    }
}

impl Stringify for MarkdownStringifier {
    fn stringify(&self, result: &RollResult) -> String {
        if result.raw().is_empty() {
            return format!("{} = `{}`", result.formula(), result.total());
        }

        let sides = result.request().sides();
        let kept = result.kept();
        // Only the first die showing the kept face survives a tie.
        let kept_index = kept.and_then(|(face, _)| result.raw().iter().position(|&f| f == face));
        let dice = result
            .raw()
            .iter()
            .enumerate()
            .map(|(i, &face)| Self::fmt_die(face, sides, kept_index.map_or(true, |k| k == i)))
            .collect::<Vec<_>>()
            .join(", ");
        let label = kept.map_or(String::new(), |(_, label)| format!(" *{}*", label));

        format!("{} ({}){} = `{}`", result.formula(), dice, label, result.total())
    }
}

/// Picks a stringifier at runtime.
#[enum_dispatch::enum_dispatch(Stringify)]
#[derive(Debug, Copy, Clone)]
pub enum Stringifier {
    SimpleStringifier,
    MarkdownStringifier,
}

impl Stringifier {
    pub fn markdown(enabled: bool) -> Self {
        if enabled {
            MarkdownStringifier.into()
        } else {
            SimpleStringifier.into()
        }
    }
}

impl Default for Stringifier {
    fn default() -> Self {
        SimpleStringifier.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::{RollContext, ScriptedRoller};
    use vec1::vec1;

    macro_rules! check {
        ($cls:expr, $input:expr, [$($face:expr),+], $expected:expr) => {
            let roller = ScriptedRoller::new(vec1![$($face),+]);
            let roll = RollContext::new(roller).roll($input).unwrap();
            let actual = $cls.stringify(&roll);
            assert_eq!(&actual, $expected);
        };
    }

    #[test]
    fn test_simple_stringify() {
        check!(SimpleStringifier, "+3", [1], "3: 3");
        check!(SimpleStringifier, "2d6+3", [2, 5], "2d6+3: [2, 5] +3 = 10");
        check!(SimpleStringifier, "2d20kh1", [14, 9], "2d20: [14, 9]→14 (Advantage) = 14");
    }

    #[test]
    fn test_markdown_stringify() {
        check!(MarkdownStringifier, "-2", [1], "-2 = `-2`");
        check!(MarkdownStringifier, "2d6+3", [2, 5], "2d6+3 (2, 5) = `10`");
        check!(MarkdownStringifier, "1d20", [20], "1d20 (**20**) = `20`");
        check!(MarkdownStringifier, "2d20kh1", [14, 9], "2d20 (14, ~~9~~) *Advantage* = `14`");
        check!(MarkdownStringifier, "2d20kl1+2", [1, 9], "2d20+2 (**1**, ~~9~~) *Disadvantage* = `3`");
        check!(MarkdownStringifier, "2d20kh1", [7, 7], "2d20 (7, ~~7~~) *Advantage* = `7`");
    }

    #[test]
    fn test_dispatch() {
        check!(Stringifier::markdown(true), "1d20", [20], "1d20 (**20**) = `20`");
        check!(Stringifier::markdown(false), "1d20", [20], "1d20: [20] = 20");
        check!(Stringifier::default(), "1d4-1", [3], "1d4-1: [3] -1 = 2");
    }
}
