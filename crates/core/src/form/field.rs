//! Base field state and the `FormField` trait.

use std::rc::Rc;

/// The form a field belongs to.
///
/// Fields hold it behind an `Rc`; the form outlives a single request's fields
/// and is never owned by them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormContext {
    name: String,
}

impl FormContext {
    /// Creates a form context with the given form name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self { name: name.into() })
    }

    /// The form's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// State every form field carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    /// Field name as submitted in form posts.
    pub name: String,
    /// Human readable label.
    pub title: Option<String>,
    /// Read-only fields render their value but accept no input.
    pub readonly: bool,
    /// Disabled fields are rendered inactive and not submitted.
    pub disabled: bool,
    /// Owning form, once attached.
    pub form: Option<Rc<FormContext>>,
}

impl FieldState {
    /// Creates an editable, detached field state.
    #[must_use]
    pub fn new(name: impl Into<String>, title: Option<String>) -> Self {
        Self {
            name: name.into(),
            title,
            readonly: false,
            disabled: false,
            form: None,
        }
    }
}

/// Behaviour shared by all form fields.
///
/// Implementors only supply access to their `FieldState`, a type tag and a
/// read-only variant of themselves. Composite fields override the setters to
/// push state down to their children.
pub trait FormField {
    /// Shared field state.
    fn state(&self) -> &FieldState;

    /// Mutable shared field state.
    fn state_mut(&mut self) -> &mut FieldState;

    /// Type tag for schema consumers and renderers.
    fn field_type(&self) -> &'static str;

    /// Returns a read-only copy of this field.
    #[must_use]
    fn readonly_transformation(&self) -> Self
    where
        Self: Sized;

    /// Field name.
    fn name(&self) -> &str {
        &self.state().name
    }

    /// Field label.
    fn title(&self) -> Option<&str> {
        self.state().title.as_deref()
    }

    /// Returns true if the field is read-only.
    fn is_readonly(&self) -> bool {
        self.state().readonly
    }

    /// Returns true if the field is disabled.
    fn is_disabled(&self) -> bool {
        self.state().disabled
    }

    /// Marks the field read-only or editable.
    fn set_readonly(&mut self, readonly: bool) {
        self.state_mut().readonly = readonly;
    }

    /// Marks the field disabled or enabled.
    fn set_disabled(&mut self, disabled: bool) {
        self.state_mut().disabled = disabled;
    }

    /// Attaches the field to a form.
    fn set_form(&mut self, form: &Rc<FormContext>) {
        self.state_mut().form = Some(Rc::clone(form));
    }

    /// The owning form, if attached.
    fn form(&self) -> Option<&Rc<FormContext>> {
        self.state().form.as_ref()
    }
}
