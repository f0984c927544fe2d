use std::ops::Range;

use floatlabel_core::{
    AttributeSet, Context, Persist, Role, Semantics, View, ViewId, ViewKind,
};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Default editable text size, in sp.
pub const TF_FONT_SP: f32 = 16.0;
pub const TF_PADDING_X: f32 = 8.0;

pub const ATTR_TEXT: &str = "text";
pub const ATTR_HINT: &str = "hint";

/// find prev/next grapheme boundaries around a byte index
fn prev_grapheme_boundary(text: &str, byte: usize) -> usize {
    text.grapheme_indices(true)
        .map(|(i, _)| i)
        .take_while(|&i| i < byte)
        .last()
        .unwrap_or(0)
}

fn next_grapheme_boundary(text: &str, byte: usize) -> usize {
    text.grapheme_indices(true)
        .map(|(i, _)| i)
        .find(|&i| i > byte)
        .unwrap_or(text.len())
}

fn clamp_to_char_boundary(s: &str, i: usize) -> usize {
    if i >= s.len() {
        return s.len();
    }
    let mut j = i;
    while j > 0 && !s.is_char_boundary(j) {
        j -= 1;
    }
    j
}

/// The editable child of a float-label field.
///
/// Content may be absent (never set, or explicitly cleared to nothing);
/// editing an absent content starts from an empty string. Mutating this
/// directly does not notify the owning field.
#[derive(Clone, Debug)]
pub struct EditableText {
    content: Option<String>,
    hint: String,
    /// byte range; caret when empty
    pub selection: Range<usize>,
    focused: bool,
    text_size: f32,
    padding_left: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditableState {
    pub text: Option<String>,
    pub hint: String,
    pub selection: (usize, usize),
}

impl EditableText {
    pub fn new(ctx: &Context) -> Self {
        Self {
            content: None,
            hint: String::new(),
            selection: 0..0,
            focused: false,
            text_size: ctx.sp_to_px(TF_FONT_SP),
            padding_left: ctx.density.scale * TF_PADDING_X,
        }
    }

    /// Reads `text` and `hint` from the layout.
    pub fn from_attributes(ctx: &Context, attrs: Option<&AttributeSet>) -> Self {
        let mut this = Self::new(ctx);
        if let Some(attrs) = attrs {
            if let Some(hint) = attrs.get(ATTR_HINT) {
                this.hint = hint.to_string();
            }
            if let Some(text) = attrs.get(ATTR_TEXT) {
                this.set_text(text);
            }
        }
        this
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Content with absence read as empty.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.text().len()
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    pub fn set_content(&mut self, content: Option<String>) {
        let end = content.as_ref().map_or(0, String::len);
        self.content = content;
        self.selection = end..end;
    }

    pub fn set_text(&mut self, text: &str) {
        self.set_content(Some(text.to_string()));
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn set_hint(&mut self, hint: impl Into<String>) {
        self.hint = hint.into();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns `true` when the focus state actually changed.
    pub fn set_focused(&mut self, focused: bool) -> bool {
        let changed = self.focused != focused;
        self.focused = focused;
        changed
    }

    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    pub fn padding_left(&self) -> f32 {
        self.padding_left
    }

    fn buf(&mut self) -> &mut String {
        self.content.get_or_insert_with(String::new)
    }

    fn clamped_selection(&self) -> Range<usize> {
        let text = self.text();
        let a = clamp_to_char_boundary(text, self.selection.start);
        let b = clamp_to_char_boundary(text, self.selection.end);
        a.min(b)..a.max(b)
    }

    /// Replaces the selection (or inserts at the caret).
    pub fn insert_text(&mut self, text: &str) {
        let range = self.clamped_selection();
        let start = range.start;
        self.buf().replace_range(range, text);
        let new_pos = start + text.len();
        self.selection = new_pos..new_pos;
    }

    pub fn delete_backward(&mut self) {
        let range = self.clamped_selection();
        if !range.is_empty() {
            self.insert_text("");
            return;
        }
        let pos = range.start;
        if pos > 0 {
            let prev = prev_grapheme_boundary(self.text(), pos);
            self.buf().replace_range(prev..pos, "");
            self.selection = prev..prev;
        }
    }

    pub fn delete_forward(&mut self) {
        let range = self.clamped_selection();
        if !range.is_empty() {
            self.insert_text("");
            return;
        }
        let pos = range.start;
        if pos < self.len() {
            let next = next_grapheme_boundary(self.text(), pos);
            self.buf().replace_range(pos..next, "");
        }
    }

    pub fn move_cursor(&mut self, delta: isize, extend_selection: bool) {
        let mut pos = clamp_to_char_boundary(self.text(), self.selection.end);
        for _ in 0..delta.unsigned_abs() {
            pos = if delta < 0 {
                prev_grapheme_boundary(self.text(), pos)
            } else {
                next_grapheme_boundary(self.text(), pos)
            };
        }
        if extend_selection {
            self.selection.end = pos;
        } else {
            self.selection = pos..pos;
        }
    }

    pub fn select_all(&mut self) {
        self.selection = 0..self.len();
    }

    pub fn selected_text(&self) -> &str {
        let range = self.clamped_selection();
        &self.text()[range]
    }

    pub fn render(&self, id: ViewId) -> View {
        View::new(
            id,
            ViewKind::TextField {
                text: self.text().to_string(),
                hint: self.hint.clone(),
                focused: self.focused,
                font_size: self.text_size,
            },
        )
        .padding_left(self.padding_left)
        .semantics(Semantics {
            role: Role::TextField,
            label: Some(self.hint.clone()),
            focused: self.focused,
            focusable: true,
        })
    }
}

impl Persist for EditableText {
    const KIND: &'static str = "floatlabel.EditableText";
    type Saved = EditableState;

    fn save(&self) -> EditableState {
        EditableState {
            text: self.content.clone(),
            hint: self.hint.clone(),
            selection: (self.selection.start, self.selection.end),
        }
    }

    fn restore(&mut self, saved: EditableState) {
        self.content = saved.text;
        self.hint = saved.hint;
        let len = self.len();
        self.selection = saved.selection.0.min(len)..saved.selection.1.min(len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> EditableText {
        EditableText::new(&Context::default())
    }

    #[test]
    fn test_content_starts_absent() {
        let state = field();
        assert_eq!(state.content(), None);
        assert_eq!(state.text(), "");
        assert!(state.is_empty());
    }

    #[test]
    fn test_textfield_insert() {
        let mut state = field();
        state.insert_text("Hello");
        assert_eq!(state.content(), Some("Hello"));
        assert_eq!(state.selection, 5..5);
    }

    #[test]
    fn test_textfield_delete_backward() {
        let mut state = field();
        state.insert_text("Hello");
        state.delete_backward();
        assert_eq!(state.text(), "Hell");
        assert_eq!(state.selection, 4..4);
    }

    #[test]
    fn test_delete_on_absent_content_is_noop() {
        let mut state = field();
        state.delete_backward();
        state.delete_forward();
        assert_eq!(state.content(), None);
    }

    #[test]
    fn test_textfield_selection() {
        let mut state = field();
        state.insert_text("Hello World");
        state.selection = 0..5;
        assert_eq!(state.selected_text(), "Hello");
        state.insert_text("Hi");
        assert_eq!(state.text(), "Hi World");
        assert_eq!(state.selection, 2..2);

        state.select_all();
        state.delete_forward();
        assert_eq!(state.text(), "");
    }

    #[test]
    fn test_textfield_cursor_movement() {
        let mut state = field();
        state.insert_text("Hello");
        state.move_cursor(-2, false);
        assert_eq!(state.selection, 3..3);

        state.move_cursor(1, false);
        assert_eq!(state.selection, 4..4);

        state.delete_forward();
        assert_eq!(state.text(), "Hell");
    }

    #[test]
    fn test_grapheme_delete_and_move() {
        let mut st = field();
        st.insert_text("A\u{1F44D}\u{1F3FD}B");
        st.move_cursor(-1, false);
        assert_eq!(st.selection.end, "A\u{1F44D}\u{1F3FD}".len());
        st.delete_backward();
        assert_eq!(st.text(), "AB");
        assert_eq!(st.selection, 1..1);
    }

    #[test]
    fn test_attributes_seed_text_and_hint() {
        let attrs = AttributeSet::new()
            .with("android:hint", "Email")
            .with("android:text", "me@example.com");
        let st = EditableText::from_attributes(&Context::default(), Some(&attrs));
        assert_eq!(st.hint(), "Email");
        assert_eq!(st.text(), "me@example.com");
        assert_eq!(st.selection, 14..14);
    }

    #[test]
    fn test_text_size_follows_scaled_density() {
        let ctx = Context::new(
            floatlabel_core::Density { scale: 2.0 },
            floatlabel_core::TextScale(1.5),
        );
        let st = EditableText::new(&ctx);
        assert_eq!(st.text_size(), 48.0);
        assert_eq!(st.padding_left(), 16.0);
    }

    #[test]
    fn test_save_restore_clamps_selection() {
        let mut st = field();
        st.set_text("abc");
        st.set_hint("Name");
        let saved = st.save();
        assert_eq!(saved.selection, (3, 3));

        let mut other = field();
        other.restore(EditableState {
            selection: (2, 10),
            ..saved
        });
        assert_eq!(other.text(), "abc");
        assert_eq!(other.hint(), "Name");
        assert_eq!(other.selection, 2..3);
    }
}
