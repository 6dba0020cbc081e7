//! Widget factory: the engine's primary client.
//!
//! Turns semantic construction calls ("a PRIMARY button labelled Save")
//! into widget descriptors with a resolved style handle attached. The
//! descriptors are what an application hands to its toolkit adapter; this
//! layer owns no styling logic beyond choosing sensible per-widget
//! defaults for the resolvers.

use crate::engine::StyleEngine;
use crate::style::backend::{StyleBackend, StyleHandle};
use crate::style::resolver::{
    ContainerKind, ContainerStyle, ControlStyle, ControlWidget, InputControl, InputStyle,
    ResolveError, TextStyle,
};
use crate::tokens::font::FontSize;
use crate::tokens::scale::{BorderWeight, SpacingToken};
use crate::tokens::shade::Shade;

/// Kind of widget a descriptor stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Label,
    Heading,
    Button,
    Checkbox,
    Entry,
    Frame,
    Card,
}

/// A styled widget description, ready to be bound to a concrete toolkit
/// widget at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSpec {
    pub kind: WidgetKind,
    pub style: StyleHandle,
    pub text: Option<String>,
}

/// Builds widget descriptors against a borrowed engine.
#[derive(Debug)]
pub struct WidgetFactory<'a, B> {
    engine: &'a mut StyleEngine<B>,
}

impl<'a, B: StyleBackend> WidgetFactory<'a, B> {
    pub fn new(engine: &'a mut StyleEngine<B>) -> Self {
        Self { engine }
    }

    /// Body-text label in the given family and shade.
    pub fn label(
        &mut self,
        text: impl Into<String>,
        family: &str,
        shade: Shade,
    ) -> Result<WidgetSpec, ResolveError> {
        let style = self.engine.resolve_text_style(&TextStyle::new(family, shade))?;
        Ok(WidgetSpec {
            kind: WidgetKind::Label,
            style,
            text: Some(text.into()),
        })
    }

    /// Bold heading text in the given family's XDARK shade.
    pub fn heading(
        &mut self,
        text: impl Into<String>,
        family: &str,
    ) -> Result<WidgetSpec, ResolveError> {
        let style = self.engine.resolve_text_style(
            &TextStyle::new(family, Shade::Xdark)
                .size(FontSize::Heading)
                .bold(true),
        )?;
        Ok(WidgetSpec {
            kind: WidgetKind::Heading,
            style,
            text: Some(text.into()),
        })
    }

    /// Push button in the given role family.
    pub fn button(
        &mut self,
        text: impl Into<String>,
        role: &str,
    ) -> Result<WidgetSpec, ResolveError> {
        let style = self
            .engine
            .resolve_control_style(&ControlStyle::new(ControlWidget::Button, role))?;
        Ok(WidgetSpec {
            kind: WidgetKind::Button,
            style,
            text: Some(text.into()),
        })
    }

    /// Checkbox in the given role family.
    pub fn checkbox(
        &mut self,
        text: impl Into<String>,
        role: &str,
    ) -> Result<WidgetSpec, ResolveError> {
        let style = self.engine.resolve_control_style(
            &ControlStyle::new(ControlWidget::Checkbox, role).border(BorderWeight::None),
        )?;
        Ok(WidgetSpec {
            kind: WidgetKind::Checkbox,
            style,
            text: Some(text.into()),
        })
    }

    /// Single-line entry field in the given role family.
    pub fn entry(&mut self, role: &str) -> Result<WidgetSpec, ResolveError> {
        let style = self
            .engine
            .resolve_input_style(&InputStyle::new(InputControl::Entry, role))?;
        Ok(WidgetSpec {
            kind: WidgetKind::Entry,
            style,
            text: None,
        })
    }

    /// Plain structural frame in the given role family.
    pub fn frame(&mut self, role: &str) -> Result<WidgetSpec, ResolveError> {
        let style = self
            .engine
            .resolve_container_style(&ContainerStyle::new(ContainerKind::Surface, role))?;
        Ok(WidgetSpec {
            kind: WidgetKind::Frame,
            style,
            text: None,
        })
    }

    /// Bordered, padded card in the given role family.
    pub fn card(&mut self, role: &str) -> Result<WidgetSpec, ResolveError> {
        let style = self.engine.resolve_container_style(
            &ContainerStyle::new(ContainerKind::Card, role)
                .border(BorderWeight::Thin)
                .padding(SpacingToken::Md),
        )?;
        Ok(WidgetSpec {
            kind: WidgetKind::Card,
            style,
            text: None,
        })
    }
}

// ===========================================================================
// Tests
// ===========================================================================
