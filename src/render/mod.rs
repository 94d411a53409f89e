//! The ASCII-art rendering collaborator.
//!
//! The dispatch layer talks to this module only through [`CowRenderer`]; the
//! built-in implementation draws a bubble and substitutes face placeholders
//! into an embedded character template.

pub mod bubble;
pub mod chara;

use uuid::Uuid;

use crate::lib::errors::RenderError;
use bubble::BubbleKind;
pub use chara::FALLBACK_CHARACTERS;

const DEFAULT_EYES: &str = "oo";
const DEFAULT_TONGUE: &str = "  ";
const FACE_WIDTH: usize = 2;

/// Named "mood" template overriding the default face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceMode {
    Borg,
    Dead,
    Greedy,
    Paranoia,
    Stoned,
    Tired,
    Wired,
    Youthful,
}

impl FaceMode {
    pub const fn eyes(&self) -> &'static str {
        match self {
            FaceMode::Borg => "==",
            FaceMode::Dead => "xx",
            FaceMode::Greedy => "$$",
            FaceMode::Paranoia => "@@",
            FaceMode::Stoned => "**",
            FaceMode::Tired => "--",
            FaceMode::Wired => "OO",
            FaceMode::Youthful => "..",
        }
    }

    pub const fn tongue(&self) -> Option<&'static str> {
        match self {
            FaceMode::Dead | FaceMode::Stoned => Some("U "),
            _ => None,
        }
    }
}

/// Face options forwarded to the renderer.
///
/// `character: None` means "let the renderer choose its own default"; the
/// dispatcher never forwards the literal `"default"` selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceOptions {
    pub character: Option<String>,
    pub eyes: Option<String>,
    pub tongue: Option<String>,
    pub mode: Option<FaceMode>,
    pub random: bool,
}

/// Rendering capability consumed by the dispatcher.
pub trait CowRenderer: Send + Sync {
    fn say(&self, message: &str, options: &FaceOptions) -> Result<String, RenderError>;
    fn think(&self, message: &str, options: &FaceOptions) -> Result<String, RenderError>;
    fn list_characters(&self) -> Result<Vec<String>, RenderError>;
}

/// Renderer backed by the embedded character templates.
#[derive(Debug, Clone)]
pub struct BuiltinRenderer {
    wrap_width: usize,
}

impl BuiltinRenderer {
    pub fn new(wrap_width: usize) -> Self {
        Self { wrap_width }
    }

    fn render(
        &self,
        message: &str,
        options: &FaceOptions,
        kind: BubbleKind,
    ) -> Result<String, RenderError> {
        let name = self.select_character(options)?;
        let template = chara::template(&name).ok_or_else(|| RenderError::UnknownCharacter {
            name: name.clone(),
        })?;

        let eyes = face_field(options.eyes.as_deref(), options.mode.map(|m| m.eyes()), DEFAULT_EYES);
        let tongue = face_field(
            options.tongue.as_deref(),
            options.mode.and_then(|m| m.tongue()),
            DEFAULT_TONGUE,
        );

        let body = template
            .replace("$thoughts", kind.thoughts())
            .replace("$eyes", &eyes)
            .replace("$tongue", &tongue);

        let mut out = bubble::bubble(message, kind, self.wrap_width);
        out.push('\n');
        out.push_str(&body);
        Ok(out)
    }

    fn select_character(&self, options: &FaceOptions) -> Result<String, RenderError> {
        if options.random {
            return Ok(random_character());
        }
        match &options.character {
            Some(name) => {
                if chara::template(name).is_none() {
                    return Err(RenderError::UnknownCharacter { name: name.clone() });
                }
                Ok(name.clone())
            }
            None => Ok("default".to_string()),
        }
    }
}

impl CowRenderer for BuiltinRenderer {
    fn say(&self, message: &str, options: &FaceOptions) -> Result<String, RenderError> {
        self.render(message, options, BubbleKind::Say)
    }

    fn think(&self, message: &str, options: &FaceOptions) -> Result<String, RenderError> {
        self.render(message, options, BubbleKind::Think)
    }

    fn list_characters(&self) -> Result<Vec<String>, RenderError> {
        Ok(chara::names())
    }
}

/// Fixed-width face field: explicit override wins over a mode preset.
/// Values are truncated or padded to the template's two-column slot.
fn face_field(explicit: Option<&str>, mode_value: Option<&'static str>, default: &str) -> String {
    let raw = explicit.or(mode_value).unwrap_or(default);
    let mut value: String = raw.chars().take(FACE_WIDTH).collect();
    while value.chars().count() < FACE_WIDTH {
        value.push(' ');
    }
    value
}

// The corpus carries no dedicated randomness crate; a v4 uuid is the only
// entropy source already in the stack.
fn random_character() -> String {
    let entropy = Uuid::new_v4();
    let index = entropy.as_bytes()[0] as usize % chara::names().len();
    chara::names()[index].clone()
}
