//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Ключевые кадры (`card-rise`, `card-slide-left`, `card-slide-right`, `card-drop`)
//! определены в `static/layout.css`.
//!
//! # Пример
//! ```text
//! // Каскадная задержка для stagger-эффекта
//! <CardAnimated appear=Appear::Rise delay_ms=stagger_delay(0)>   // карточка 1
//! <CardAnimated appear=Appear::Rise delay_ms=stagger_delay(1)>   // карточка 2
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Длительность анимации появления, мс
pub const APPEAR_DURATION_MS: u32 = 500;

/// Шаг каскадной задержки между соседними карточками, мс
pub const STAGGER_STEP_MS: u32 = 100;

/// Направление, откуда карточка «въезжает»
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appear {
    /// Снизу вверх (y: 20px → 0)
    #[default]
    Rise,
    /// Сверху вниз (y: -20px → 0)
    Drop,
    /// Слева (x: -20px → 0)
    SlideFromLeft,
    /// Справа (x: 20px → 0)
    SlideFromRight,
}

impl Appear {
    pub fn keyframes(&self) -> &'static str {
        match self {
            Appear::Rise => "card-rise",
            Appear::Drop => "card-drop",
            Appear::SlideFromLeft => "card-slide-left",
            Appear::SlideFromRight => "card-slide-right",
        }
    }
}

/// Задержка для карточки с индексом `index` в списке
pub fn stagger_delay(index: usize) -> u32 {
    (index as u32).saturating_mul(STAGGER_STEP_MS)
}

/// Inline-стиль анимации появления
pub fn animation_style(appear: Appear, delay_ms: u32) -> String {
    format!(
        "animation: {} {}ms ease-out {}ms both;",
        appear.keyframes(),
        APPEAR_DURATION_MS,
        delay_ms
    )
}

/// Обёртка над Thaw [`Card`] с анимацией появления.
///
/// # Props
/// - `appear`   — направление появления (по умолчанию [`Appear::Rise`]).
/// - `delay_ms` — задержка анимации в мс (по умолчанию `0`).
/// - `class`    — дополнительные CSS-классы карточки.
#[component]
pub fn CardAnimated(
    #[prop(optional)] appear: Appear,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let full_style = animation_style(appear, delay_ms);

    view! {
        <Card class=class attr:style=full_style>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_style() {
        assert_eq!(
            animation_style(Appear::Rise, 0),
            "animation: card-rise 500ms ease-out 0ms both;"
        );
        assert_eq!(
            animation_style(Appear::SlideFromLeft, 200),
            "animation: card-slide-left 500ms ease-out 200ms both;"
        );
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(1), 100);
        assert_eq!(stagger_delay(5), 500);
    }

    #[test]
    fn test_default_appear_is_rise() {
        assert_eq!(Appear::default(), Appear::Rise);
    }
}
