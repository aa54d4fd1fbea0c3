//! New-topic dialog state.
//!
//! Holds the three form fields and which one has the cursor. The draft
//! survives closing the dialog and is only cleared by a successful submit.

use crate::data::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Category,
    Content,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Category,
            FormField::Category => FormField::Content,
            FormField::Content => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Content,
            FormField::Category => FormField::Title,
            FormField::Content => FormField::Category,
        }
    }

    /// Whether typed characters go into this field.
    pub fn is_text(self) -> bool {
        !matches!(self, FormField::Category)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TopicFormState {
    pub open: bool,
    pub field: FormField,
    pub title: String,
    pub category: Category,
    pub content: String,
    default_category: Category,
}

impl TopicFormState {
    pub fn new(default_category: Category) -> Self {
        Self {
            category: default_category,
            default_category,
            ..Default::default()
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Clears the fields and closes the dialog after a successful submit.
    pub fn reset_and_close(&mut self) {
        self.title.clear();
        self.content.clear();
        self.category = self.default_category;
        self.field = FormField::Title;
        self.open = false;
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    pub fn next_category(&mut self) {
        self.category = self.category.next();
    }

    pub fn prev_category(&mut self) {
        self.category = self.category.prev();
    }

    /// Appends to the focused text field. Ignored on the category selector.
    pub fn append_char(&mut self, c: char) {
        match self.field {
            FormField::Title => self.title.push(c),
            FormField::Content => self.content.push(c),
            FormField::Category => {}
        }
    }

    /// Removes the last character of the focused text field.
    ///
    /// Returns `true` if a character was removed.
    pub fn pop_char(&mut self) -> bool {
        match self.field {
            FormField::Title => self.title.pop().is_some(),
            FormField::Content => self.content.pop().is_some(),
            FormField::Category => false,
        }
    }

    /// Returns `true` when both title and content have non-blank text.
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_category() {
        let form = TopicFormState::new(Category::Guides);
        assert!(!form.open);
        assert_eq!(form.field, FormField::Title);
        assert_eq!(form.category, Category::Guides);
    }

    #[test]
    fn test_field_cycle() {
        let mut form = TopicFormState::new(Category::Discussions);
        form.next_field();
        assert_eq!(form.field, FormField::Category);
        form.next_field();
        assert_eq!(form.field, FormField::Content);
        form.next_field();
        assert_eq!(form.field, FormField::Title);
        form.prev_field();
        assert_eq!(form.field, FormField::Content);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = TopicFormState::new(Category::Discussions);
        form.append_char('a');
        form.next_field();
        form.append_char('z');
        form.next_field();
        form.append_char('b');
        assert_eq!(form.title, "a");
        assert_eq!(form.content, "b");
        assert!(form.pop_char());
        assert_eq!(form.content, "");
        assert!(!form.pop_char());
    }

    #[test]
    fn test_category_selector_cycles() {
        let mut form = TopicFormState::new(Category::Discussions);
        form.next_category();
        assert_eq!(form.category, Category::Guides);
        form.prev_category();
        form.prev_category();
        assert_eq!(form.category, Category::News);
    }

    #[test]
    fn test_submittable_requires_both_fields() {
        let mut form = TopicFormState::new(Category::Discussions);
        form.title = "  ".into();
        form.content = "body".into();
        assert!(!form.is_submittable());
        form.title = "title".into();
        assert!(form.is_submittable());
        form.content = "\n".into();
        assert!(!form.is_submittable());
    }

    #[test]
    fn test_close_keeps_draft_reset_clears_it() {
        let mut form = TopicFormState::new(Category::Bugs);
        form.open();
        form.title = "draft".into();
        form.next_category();
        form.close();
        assert!(!form.open);
        assert_eq!(form.title, "draft");

        form.open();
        form.content = "body".into();
        form.next_field();
        form.reset_and_close();
        assert!(!form.open);
        assert_eq!(form.title, "");
        assert_eq!(form.content, "");
        assert_eq!(form.category, Category::Bugs);
        assert_eq!(form.field, FormField::Title);
    }
}
