//! Hidden form-field descriptors and the seam to whatever renders them.

use std::convert::Infallible;
use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

pub const HIDDEN_INPUT_TAG: &str = "input";
pub const HIDDEN_INPUT_TYPE: &str = "hidden";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    #[serde(rename = "hidden")]
    HiddenFormField,
}

impl ElementKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::HiddenFormField => "hidden form field",
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::HiddenFormField => HIDDEN_INPUT_TAG,
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::HiddenFormField => HIDDEN_INPUT_TYPE,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Plain record describing one element for an external rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    kind: ElementKind,
    name: String,
    value: String,
}

impl ElementDescriptor {
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn input_type(&self) -> &'static str {
        self.kind.input_type()
    }
}

/// `name` and `value` are stored verbatim; escaping is left to the renderer.
pub fn create_hidden_field(name: impl Into<String>, value: impl Into<String>) -> ElementDescriptor {
    ElementDescriptor {
        kind: ElementKind::HiddenFormField,
        name: name.into(),
        value: value.into(),
    }
}

/// Capability that turns a descriptor into a host element.
pub trait Render {
    type Output;
    type Error;

    fn render(&mut self, element: &ElementDescriptor) -> Result<Self::Output, Self::Error>;
}

/// Renders descriptors as HTML markup with escaped attribute values.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkupRenderer;

impl Render for MarkupRenderer {
    type Output = String;
    type Error = Infallible;

    fn render(&mut self, element: &ElementDescriptor) -> Result<String, Infallible> {
        let mut out = String::with_capacity(32 + element.name.len() + element.value.len());
        let _ = write!(
            &mut out,
            "<{} type=\"{}\" name=\"{}\" value=\"{}\">",
            element.tag(),
            element.input_type(),
            escape_attr(&element.name),
            escape_attr(&element.value),
        );
        Ok(out)
    }
}

fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
