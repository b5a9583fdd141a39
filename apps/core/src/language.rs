use crate::locale::{lookup, translate, Language, UiKey};
use crate::view::{TranslationBinding, ViewTree};
use tracing::debug;

/// Re-renders the statically registered translatable elements.
#[derive(Debug)]
pub struct LanguageSwitcher<E> {
    bindings: Vec<TranslationBinding<E>>,
}

impl<E> LanguageSwitcher<E> {
    pub const fn new(bindings: Vec<TranslationBinding<E>>) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &[TranslationBinding<E>] {
        &self.bindings
    }

    /// Writes every binding's text for `lang`. Bindings whose key is unknown
    /// keep their current text.
    pub fn apply<V>(&self, view: &mut V, lang: Language)
    where
        V: ViewTree<Element = E>,
    {
        for binding in &self.bindings {
            match lookup(lang, &binding.key) {
                Some(text) => view.set_bound_text(&binding.element, binding.property, text),
                None => debug!(key = %binding.key, %lang, "no translation for key"),
            }
        }
        view.set_document_title(translate(lang, UiKey::Title));
    }
}
