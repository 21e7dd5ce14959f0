//! Parsed swipe actions.
//!
//! Mapping values are free-form strings. A value starting with the reserved
//! `#` prefix may name a functional instruction; everything else is literal
//! text. Parsing happens once when the table is built.

use std::fmt;

/// Reserved prefix for functional instructions.
pub const INSTRUCTION_PREFIX: char = '#';

const SELECT_INDEX_PREFIX: &str = "#selectIndex:";
const SEND_KEYS_PREFIX: &str = "#sendKeys(";

/// Named command an action string can trigger instead of inserting text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    SimplifiedTraditionalSwitch,
    SwitchChineseOrEnglish,
    BeginOfSentence,
    EndOfSentence,
    SelectSecondary,
    SelectTertiary,
    SelectInputSchema,
    SelectColorSchema,
    NewLine,
    ClearSpellingArea,
    SwitchLastInputSchema,
    OneHandOnLeft,
    OneHandOnRight,
    RimeSwitcher,
    EmojiKeyboard,
    SymbolKeyboard,
    NumberKeyboard,
    MoveLeft,
    MoveRight,
    Cut,
    Copy,
    Paste,
    DismissKeyboard,
    /// Commit the candidate at this zero-based index.
    SelectCandidate(usize),
    /// Feed these keys to the composition engine.
    SendKeys(String),
}

impl InstructionKind {
    fn from_name(raw: &str) -> Option<Self> {
        let kind = match raw {
            "#简繁切换" | "#繁简切换" => Self::SimplifiedTraditionalSwitch,
            "#中英切换" => Self::SwitchChineseOrEnglish,
            "#行首" => Self::BeginOfSentence,
            "#行尾" => Self::EndOfSentence,
            "#次选上屏" => Self::SelectSecondary,
            "#三选上屏" => Self::SelectTertiary,
            "#方案切换" => Self::SelectInputSchema,
            "#配色切换" => Self::SelectColorSchema,
            "#换行" => Self::NewLine,
            "#重输" | "#清屏" => Self::ClearSpellingArea,
            "#上个输入方案" | "#切换上个输入方案" => Self::SwitchLastInputSchema,
            "#左手模式" => Self::OneHandOnLeft,
            "#右手模式" => Self::OneHandOnRight,
            "#RimeSwitcher" => Self::RimeSwitcher,
            "#emojiKeyboard" => Self::EmojiKeyboard,
            "#symbolKeyboard" => Self::SymbolKeyboard,
            "#numberKeyboard" => Self::NumberKeyboard,
            "#左移" => Self::MoveLeft,
            "#右移" => Self::MoveRight,
            "#剪切" => Self::Cut,
            "#复制" => Self::Copy,
            "#粘贴" => Self::Paste,
            "#关闭键盘" => Self::DismissKeyboard,
            _ => return Self::parse_parameterised(raw),
        };
        Some(kind)
    }

    fn parse_parameterised(raw: &str) -> Option<Self> {
        if let Some(index) = raw.strip_prefix(SELECT_INDEX_PREFIX) {
            // `usize::from_str` accepts a leading '+', which is not an index.
            if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            return index.parse().ok().map(Self::SelectCandidate);
        }
        if let Some(rest) = raw.strip_prefix(SEND_KEYS_PREFIX) {
            let keys = rest.strip_suffix(')')?;
            if keys.is_empty() {
                return None;
            }
            return Some(Self::SendKeys(keys.to_string()));
        }
        None
    }

    /// Short label shown on a key for this instruction; empty when the
    /// instruction has no compact glyph.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SimplifiedTraditionalSwitch => "繁",
            Self::SwitchChineseOrEnglish => "英",
            Self::BeginOfSentence => "⇤",
            Self::EndOfSentence => "⇥",
            Self::SelectSecondary => "次",
            Self::SelectTertiary => "三",
            Self::NewLine => "↵",
            Self::ClearSpellingArea => "重",
            Self::OneHandOnLeft => "左",
            Self::OneHandOnRight => "右",
            Self::MoveLeft => "←",
            Self::MoveRight => "→",
            _ => "",
        }
    }
}

/// A recognised functional instruction together with the string it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub kind: InstructionKind,
    raw: String,
}

impl Instruction {
    /// Parse a reserved-prefix string. Unknown names and malformed parameters
    /// yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        if !raw.starts_with(INSTRUCTION_PREFIX) {
            return None;
        }
        InstructionKind::from_name(raw).map(|kind| Self {
            kind,
            raw: raw.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// What a swipe does once resolved through the mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    InsertText(String),
    Instruction(Instruction),
}

impl Action {
    /// Parse a mapping value. Empty values mean "no effect" and return `None`.
    ///
    /// A `#` string that is not a recognised instruction is kept as literal
    /// text, so a typo in the configuration still produces visible output.
    pub fn parse(raw: &str) -> Option<Action> {
        if raw.is_empty() {
            return None;
        }
        match Instruction::parse(raw) {
            Some(instr) => Some(Action::Instruction(instr)),
            None => Some(Action::InsertText(raw.to_string())),
        }
    }

    /// The original mapping value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::InsertText(text) => text,
            Self::Instruction(instr) => instr.as_str(),
        }
    }

    /// Text to print on a key for this action.
    pub fn label(&self) -> String {
        match self {
            Self::InsertText(text) => text.trim().to_string(),
            Self::Instruction(instr) => instr.kind.label().to_string(),
        }
    }
}
