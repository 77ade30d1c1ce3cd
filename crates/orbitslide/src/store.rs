use crate::model::Slide;
use crate::render::SlideEdit;

/// The deck being edited and the index of the slide on the canvas.
///
/// `None` means no deck is loaded (home screen). Whole-deck replacements bump
/// `revision`, which the autoplay timer uses as the deck identity.
#[derive(Debug, Clone, Default)]
pub struct SlideStore {
    slides: Option<Vec<Slide>>,
    current: usize,
    revision: u64,
}

impl SlideStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slides(&self) -> Option<&[Slide]> {
        self.slides.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.slides.is_some()
    }

    pub fn len(&self) -> usize {
        self.slides.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.as_ref()?.get(self.current)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the whole deck and go back to the first slide.
    pub fn set_deck(&mut self, slides: Vec<Slide>) {
        self.slides = Some(slides);
        self.current = 0;
        self.revision += 1;
    }

    /// Replace the whole deck keeping the current position, clamped to the
    /// new length.
    pub fn replace_deck(&mut self, slides: Vec<Slide>) {
        self.current = self.current.min(slides.len().saturating_sub(1));
        self.slides = Some(slides);
        self.revision += 1;
    }

    /// Discard the deck.
    pub fn clear(&mut self) {
        self.slides = None;
        self.current = 0;
        self.revision += 1;
    }

    /// Replace one slide. Does nothing when no deck is loaded or `index` is
    /// out of range.
    pub fn update_slide(&mut self, index: usize, slide: Slide) {
        if let Some(target) = self.slides.as_mut().and_then(|s| s.get_mut(index)) {
            *target = slide;
        }
    }

    pub fn update_current(&mut self, slide: Slide) {
        self.update_slide(self.current, slide);
    }

    /// Apply a field edit coming from the renderer.
    pub fn apply_edit(&mut self, index: usize, edit: &SlideEdit) {
        if let Some(target) = self.slides.as_mut().and_then(|s| s.get_mut(index)) {
            *target = edit.apply(target);
        }
    }

    /// Insert `slide` right after `after_index` and make it current.
    pub fn insert_slide(&mut self, after_index: usize, slide: Slide) {
        let Some(slides) = self.slides.as_mut() else {
            return;
        };
        let at = after_index.saturating_add(1).min(slides.len());
        slides.insert(at, slide);
        self.current = at;
    }

    /// Move to `index`, clamped to the deck bounds.
    pub fn set_index(&mut self, index: isize) {
        let last = self.len().saturating_sub(1);
        self.current = index.clamp(0, last as isize) as usize;
    }

    pub fn next(&mut self) {
        self.set_index(self.current as isize + 1);
    }

    pub fn prev(&mut self) {
        self.set_index(self.current as isize - 1);
    }

    /// Step forward, looping from the last slide to the first.
    pub fn advance_wrapping(&mut self) {
        let len = self.len();
        if len > 0 {
            self.current = (self.current + 1) % len;
        }
    }

    /// Set the entrance animation and/or speed of the current slide.
    pub fn set_animation(&mut self, animation: Option<String>, speed: Option<String>) {
        let Some(mut slide) = self.current().cloned() else {
            return;
        };
        if animation.is_some() {
            slide.animation_type = animation;
        }
        if speed.is_some() {
            slide.animation_speed = speed;
        }
        self.update_current(slide);
    }

    pub fn set_custom_image(&mut self, source: String) {
        let Some(mut slide) = self.current().cloned() else {
            return;
        };
        slide.custom_image = Some(source);
        self.update_current(slide);
    }

    /// Append a placeholder text block to the current slide.
    pub fn add_text_block(&mut self) {
        let Some(mut slide) = self.current().cloned() else {
            return;
        };
        slide.content.push("New Text Block".to_string());
        self.update_current(slide);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Layout;
    use crate::render::Field;

    fn deck(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("Slide {i}"), Layout::BulletPoints, &["a"]))
            .collect()
    }

    #[test]
    fn test_set_deck_resets_index() {
        let mut store = SlideStore::new();
        store.set_deck(deck(3));
        store.set_index(2);
        store.set_deck(deck(5));
        assert_eq!(store.current_index(), 0);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_update_without_deck_is_noop() {
        let mut store = SlideStore::new();
        store.update_slide(0, Slide::blank());
        assert!(!store.is_loaded());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let mut store = SlideStore::new();
        store.set_deck(deck(2));
        store.update_slide(7, Slide::blank());
        assert_eq!(store.slides().unwrap(), deck(2).as_slice());
    }

    #[test]
    fn test_insert_grows_by_one_and_selects_new_slide() {
        for start in 0..3 {
            let mut store = SlideStore::new();
            store.set_deck(deck(3));
            store.set_index(start as isize);
            store.insert_slide(store.current_index(), Slide::blank());
            assert_eq!(store.len(), 4);
            assert_eq!(store.current_index(), start + 1);
            assert_eq!(store.current().unwrap(), &Slide::blank());
        }
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut store = SlideStore::new();
        store.set_deck(deck(2));
        store.insert_slide(10, Slide::blank());
        assert_eq!(store.len(), 3);
        assert_eq!(store.current_index(), 2);
    }

    #[test]
    fn test_set_index_clamps() {
        let mut store = SlideStore::new();
        store.set_deck(deck(4));
        store.set_index(-5);
        assert_eq!(store.current_index(), 0);
        store.set_index(99);
        assert_eq!(store.current_index(), 3);
        store.set_index(99);
        assert_eq!(store.current_index(), 3);
        store.set_index(2);
        assert_eq!(store.current_index(), 2);
    }

    #[test]
    fn test_set_index_on_empty_deck() {
        let mut store = SlideStore::new();
        store.set_deck(Vec::new());
        store.set_index(3);
        assert_eq!(store.current_index(), 0);
        store.advance_wrapping();
        assert_eq!(store.current_index(), 0);
    }

    #[test]
    fn test_next_prev_do_not_wrap() {
        let mut store = SlideStore::new();
        store.set_deck(deck(2));
        store.prev();
        assert_eq!(store.current_index(), 0);
        store.next();
        store.next();
        assert_eq!(store.current_index(), 1);
    }

    #[test]
    fn test_advance_wrapping_loops() {
        let mut store = SlideStore::new();
        store.set_deck(deck(2));
        store.advance_wrapping();
        assert_eq!(store.current_index(), 1);
        store.advance_wrapping();
        assert_eq!(store.current_index(), 0);
    }

    #[test]
    fn test_replace_deck_clamps_index() {
        let mut store = SlideStore::new();
        store.set_deck(deck(6));
        store.set_index(5);
        store.replace_deck(deck(2));
        assert_eq!(store.current_index(), 1);

        store.replace_deck(deck(4));
        assert_eq!(store.current_index(), 1);
    }

    #[test]
    fn test_revision_changes_on_replacement_only() {
        let mut store = SlideStore::new();
        store.set_deck(deck(2));
        let rev = store.revision();
        store.update_current(Slide::blank());
        store.next();
        assert_eq!(store.revision(), rev);
        store.replace_deck(deck(2));
        assert_ne!(store.revision(), rev);
    }

    #[test]
    fn test_apply_edit() {
        let mut store = SlideStore::new();
        store.set_deck(deck(1));
        store.apply_edit(0, &SlideEdit::new(Field::Title, "Renamed"));
        assert_eq!(store.current().unwrap().title, "Renamed");
    }

    #[test]
    fn test_current_slide_setters() {
        let mut store = SlideStore::new();
        store.set_deck(deck(2));
        store.set_index(1);

        store.set_animation(Some("animate__zoomIn".into()), None);
        store.set_animation(None, Some("animate__fast".into()));
        store.set_custom_image("https://example.com/x.png".into());
        store.add_text_block();

        let slide = store.current().unwrap();
        assert_eq!(slide.animation_type.as_deref(), Some("animate__zoomIn"));
        assert_eq!(slide.animation_speed.as_deref(), Some("animate__fast"));
        assert_eq!(slide.custom_image.as_deref(), Some("https://example.com/x.png"));
        assert_eq!(slide.content, vec!["a", "New Text Block"]);
        assert_eq!(store.slides().unwrap()[0], deck(1)[0]);
    }

    #[test]
    fn test_clear() {
        let mut store = SlideStore::new();
        store.set_deck(deck(3));
        store.set_index(2);
        store.clear();
        assert!(!store.is_loaded());
        assert_eq!(store.current_index(), 0);
    }
}
