// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use style_primitives::{palette, Font, FontTraits, FontWeight, InlineObject, Shadow, UnderlineStyle};

use crate::{
    AttributeDictionary, AttributeKey, AttributeValue, Background, Directive, ErrorKind, Link,
    ResolveContext, StyleMarker, TextDocument, LINK_COLOR, OBJECT_REPLACEMENT_CHARACTER,
};

/// Reference implementation of resolution.
///
/// This intentionally uses the simplest (and slowest) algorithm: for each boundary segment,
/// replay every directive at or before the segment's start from scratch. The production
/// iterator keeps one live dictionary across the whole pass; this helper exists to assert that
/// it preserves identical semantics.
fn reference_resolve(
    doc: &TextDocument,
    base_font: &Font,
) -> Vec<(Range<usize>, AttributeDictionary)> {
    let mut boundaries = vec![0, doc.len()];
    boundaries.extend(doc.directives().map(|(position, _)| position));
    boundaries.sort_unstable();
    boundaries.dedup();

    let mut out = Vec::new();
    for pair in boundaries.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let mut current = AttributeDictionary::new();
        // Whether the font in `current` came from trait conversions of the base font.
        let mut derived = false;
        let mut saved = Vec::new();
        for (_, directive) in doc.directives().filter(|(position, _)| *position <= start) {
            match directive {
                Directive::Set(key, value) => {
                    derived &= *key != AttributeKey::Font;
                    current.insert(key.clone(), value.clone());
                }
                Directive::Clear(key) => {
                    derived &= *key != AttributeKey::Font;
                    current.remove(key);
                }
                Directive::Marker(StyleMarker::Push) => {
                    saved.push((current.clone(), derived));
                    current = AttributeDictionary::new();
                    derived = false;
                }
                Directive::Marker(StyleMarker::Pop) => {
                    (current, derived) = saved.pop().expect("balanced");
                }
                Directive::Marker(StyleMarker::Underline) => {
                    current.insert(
                        AttributeKey::UnderlineStyle,
                        AttributeValue::Underline(UnderlineStyle::Single),
                    );
                }
                Directive::Marker(StyleMarker::NoUnderline) => {
                    current.remove(&AttributeKey::UnderlineStyle);
                }
                Directive::Marker(StyleMarker::Emboss) => {
                    current.insert(AttributeKey::Shadow, AttributeValue::Shadow(Shadow::EMBOSS));
                }
                Directive::Marker(StyleMarker::NoEmboss) => {
                    current.remove(&AttributeKey::Shadow);
                }
                Directive::Marker(marker) => {
                    let traits = marker.font_traits().expect("font trait marker");
                    let from_base = current.font().is_none() || derived;
                    let font = current.font().unwrap_or(base_font).with_traits(traits);
                    if from_base && &font == base_font {
                        current.remove(&AttributeKey::Font);
                        derived = false;
                    } else {
                        current.insert(AttributeKey::Font, AttributeValue::Font(font));
                        derived = from_base;
                    }
                }
            }
        }
        out.push((start..end, current));
    }
    out
}

fn ranges(doc: &TextDocument) -> Vec<(Range<usize>, AttributeDictionary)> {
    doc.resolve()
        .into_iter()
        .map(|resolved| (resolved.range, resolved.attributes))
        .collect()
}

fn font_attr(font: Font) -> (AttributeKey, AttributeValue) {
    (AttributeKey::Font, AttributeValue::Font(font))
}

fn color_attr(color: style_primitives::Color) -> (AttributeKey, AttributeValue) {
    (AttributeKey::ForegroundColor, AttributeValue::Color(color))
}

#[test]
fn bold_is_added_then_removed() {
    let doc = TextDocument::from("A") << StyleMarker::Bold << "B" << StyleMarker::Unbold << "C";
    assert_eq!(
        ranges(&doc),
        [
            (0..1, AttributeDictionary::new()),
            (
                1..2,
                AttributeDictionary::from([font_attr(
                    Font::default().with_traits(FontTraits::BOLD)
                )])
            ),
            (2..3, AttributeDictionary::new()),
        ]
    );
}

#[test]
fn font_traits_apply_to_active_font() {
    let menlo = Font::new("Menlo", 12.0);
    let doc = TextDocument::new()
        << menlo.clone()
        << "a"
        << StyleMarker::Bold
        << StyleMarker::Italic
        << "b"
        << StyleMarker::Unbold
        << "c";
    let resolved = doc.resolve();
    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved[0].attributes.font(), Some(&menlo));

    let bold_italic = resolved[1].attributes.font().expect("font");
    assert_eq!(bold_italic.family(), "Menlo");
    assert_eq!(bold_italic.traits(), FontTraits::BOLD | FontTraits::ITALIC);

    // An explicit font is kept even when only its italic trait remains.
    let italic = resolved[2].attributes.font().expect("font");
    assert_eq!(italic.weight(), FontWeight::NORMAL);
    assert_eq!(italic.traits(), FontTraits::ITALIC);
}

#[test]
fn unbold_restores_explicit_font() {
    let menlo = Font::new("Menlo", 12.0);
    let doc = TextDocument::new()
        << menlo.clone()
        << StyleMarker::Bold
        << "a"
        << StyleMarker::Unbold
        << "b";
    let resolved = doc.resolve();
    assert_eq!(resolved[1].attributes.font(), Some(&menlo));
}

#[test]
fn explicit_default_font_survives_unbold() {
    let doc = TextDocument::new() << Font::default() << StyleMarker::Unbold << "x";
    assert_eq!(
        ranges(&doc),
        [(0..1, AttributeDictionary::from([font_attr(Font::default())]))]
    );
}

#[test]
fn explicit_default_font_round_trips_through_bold() {
    let doc = TextDocument::new()
        << Font::default()
        << StyleMarker::Bold
        << "a"
        << StyleMarker::Unbold
        << "b";
    assert_eq!(
        ranges(&doc),
        [
            (
                0..1,
                AttributeDictionary::from([font_attr(
                    Font::default().with_traits(FontTraits::BOLD)
                )])
            ),
            (1..2, AttributeDictionary::from([font_attr(Font::default())])),
        ]
    );
}

#[test]
fn explicit_font_equal_to_context_base_font_is_kept() {
    let helvetica = Font::new("Helvetica", 13.0);
    let context = ResolveContext::new().with_base_font(helvetica.clone());
    let doc = TextDocument::new()
        << helvetica.clone()
        << StyleMarker::Italic
        << "a"
        << StyleMarker::Unitalic
        << "b";
    let resolved: Vec<_> = doc
        .resolve_with(&context)
        .into_iter()
        .map(|resolved| (resolved.range, resolved.attributes))
        .collect();
    assert_eq!(
        resolved,
        [
            (
                0..1,
                AttributeDictionary::from([font_attr(
                    helvetica.with_traits(FontTraits::ITALIC)
                )])
            ),
            (1..2, AttributeDictionary::from([font_attr(helvetica)])),
        ]
    );
}

#[test]
fn nested_document_restores_derived_font_state() {
    // The outer bold font is derived from the base, so unbold after the nested document still
    // unbinds it.
    let inner = TextDocument::new() << Font::default() << "y";
    let doc = StyleMarker::Bold << "x" << &inner << StyleMarker::Unbold << "z";
    let resolved = ranges(&doc);
    assert_eq!(resolved.len(), 3);
    assert_eq!(
        resolved[1],
        (1..2, AttributeDictionary::from([font_attr(Font::default())]))
    );
    assert_eq!(resolved[2], (2..3, AttributeDictionary::new()));
}

#[test]
fn context_base_font_is_used_without_active_font() {
    let helvetica = Font::new("Helvetica", 13.0);
    let context = ResolveContext::new().with_base_font(helvetica.clone());
    let doc = StyleMarker::Bold << "a" << StyleMarker::Unbold << "b";
    let resolved = doc.try_resolve(&context).expect("balanced");
    assert_eq!(
        resolved[0].attributes.font(),
        Some(&helvetica.with_traits(FontTraits::BOLD))
    );
    assert!(resolved[1].attributes.is_empty());
}

#[test]
fn nested_document_is_isolated_and_outer_is_restored() {
    let inner = TextDocument::new() << palette::css::BLUE << "y";
    let doc = TextDocument::new() << palette::css::RED << "x" << &inner << "z";
    assert_eq!(
        ranges(&doc),
        [
            (0..1, AttributeDictionary::from([color_attr(palette::css::RED)])),
            (1..2, AttributeDictionary::from([color_attr(palette::css::BLUE)])),
            (2..3, AttributeDictionary::from([color_attr(palette::css::RED)])),
        ]
    );
}

#[test]
fn plain_nested_document_inherits_nothing() {
    let inner = TextDocument::from("inner");
    let doc = TextDocument::new()
        << palette::css::RED
        << Background(palette::css::YELLOW)
        << Shadow::EMBOSS
        << "outer "
        << &inner
        << " outer";
    let resolved = doc.resolve();
    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved[1].text(&doc), Some("inner"));
    assert!(resolved[1].attributes.is_empty());
    assert_eq!(resolved[0].attributes, resolved[2].attributes);
    assert_eq!(resolved[2].attributes.len(), 3);
}

#[test]
fn nested_font_traits_start_from_base_font() {
    let inner = StyleMarker::Bold << "y";
    let doc = TextDocument::new() << Font::new("Menlo", 12.0) << "x" << &inner << "z";
    let resolved = doc.resolve();
    assert_eq!(
        resolved[1].attributes.font(),
        Some(&Font::default().with_traits(FontTraits::BOLD))
    );
    assert_eq!(resolved[2].attributes.font().map(Font::family), Some("Menlo"));
}

#[test]
fn deeply_nested_documents_restore_each_level() {
    let level2 = TextDocument::new() << palette::css::GREEN << "c";
    let level1 = TextDocument::new() << palette::css::BLUE << "b" << &level2 << "d";
    let doc = TextDocument::new() << palette::css::RED << "a" << &level1 << "e";
    let colors: Vec<_> = doc
        .resolve()
        .into_iter()
        .map(|resolved| resolved.attributes.foreground_color())
        .collect();
    assert_eq!(
        colors,
        [
            Some(palette::css::RED),
            Some(palette::css::BLUE),
            Some(palette::css::GREEN),
            Some(palette::css::BLUE),
            Some(palette::css::RED),
        ]
    );
}

#[test]
fn embedded_object_is_confined_to_one_placeholder() {
    let object = InlineObject::new(1, 12.0, 12.0);
    let doc = TextDocument::new() << object << "Y";
    let resolved = doc.resolve();
    assert_eq!(resolved.len(), 2);

    let placeholder = &resolved[0];
    assert_eq!(placeholder.range, 0..OBJECT_REPLACEMENT_CHARACTER.len_utf8());
    assert_eq!(placeholder.text(&doc).map(|s| s.chars().count()), Some(1));
    assert_eq!(placeholder.attributes.attachment(), Some(&object));

    assert_eq!(resolved[1].text(&doc), Some("Y"));
    assert!(!resolved[1].attributes.contains_key(&AttributeKey::Attachment));
}

#[test]
fn embedded_object_keeps_surrounding_attributes() {
    let object = InlineObject::new(2, 8.0, 8.0);
    let doc = TextDocument::new() << palette::css::RED << "a" << object << "b";
    let resolved = doc.resolve();
    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved[1].attributes.foreground_color(), Some(palette::css::RED));
    assert_eq!(resolved[1].attributes.attachment(), Some(&object));
    assert_eq!(resolved[2].attributes.len(), 1);
}

#[test]
fn link_resolves_to_target_color_and_underline() {
    let doc = TextDocument::from("see ") << Link::new("https://example.invalid") << "here";
    let resolved = doc.resolve();
    assert_eq!(resolved.len(), 2);
    assert!(resolved[0].attributes.is_empty());

    let link = &resolved[1].attributes;
    assert_eq!(link.link().map(Link::target), Some("https://example.invalid"));
    assert_eq!(link.foreground_color(), Some(LINK_COLOR));
    assert_eq!(link.underline(), Some(UnderlineStyle::Single));
}

#[test]
fn underline_and_emboss_toggle() {
    let doc = TextDocument::new()
        << StyleMarker::Underline
        << StyleMarker::Emboss
        << "a"
        << StyleMarker::NoUnderline
        << "b"
        << StyleMarker::NoEmboss
        << "c";
    let resolved = doc.resolve();
    assert_eq!(resolved[0].attributes.underline(), Some(UnderlineStyle::Single));
    assert_eq!(resolved[0].attributes.shadow(), Some(Shadow::EMBOSS));
    assert_eq!(resolved[1].attributes.underline(), None);
    assert_eq!(resolved[1].attributes.shadow(), Some(Shadow::EMBOSS));
    assert!(resolved[2].attributes.is_empty());
}

#[test]
fn set_and_clear_custom_attributes() {
    let kern = AttributeKey::custom("x-kern");
    let mut doc = TextDocument::new();
    doc.set_attribute(kern.clone(), 0.5_f64)
        .append("a")
        .clear_attribute(kern.clone())
        .clear_attribute(AttributeKey::Shadow)
        .append("b");
    let resolved = doc.resolve();
    assert_eq!(resolved[0].attributes.get(&kern), Some(&AttributeValue::Number(0.5)));
    assert!(resolved[1].attributes.is_empty());
}

#[test]
fn empty_and_directive_only_documents_have_no_ranges() {
    assert!(TextDocument::new().resolve().is_empty());
    let doc = TextDocument::new() << StyleMarker::Bold << palette::css::RED;
    assert!(doc.resolve().is_empty());
}

#[test]
fn trailing_directives_do_not_emit_empty_ranges() {
    let doc = TextDocument::from("ab") << palette::css::RED << StyleMarker::Underline;
    assert_eq!(ranges(&doc), [(0..2, AttributeDictionary::new())]);
}

#[test]
fn every_distinct_position_splits_a_range() {
    // Setting the same color twice still splits; coalescing merges it back.
    let doc = TextDocument::new() << palette::css::RED << "a" << palette::css::RED << "b";
    assert_eq!(doc.resolve().len(), 2);

    let coalesced: Vec<_> = doc.resolved_ranges_coalesced().collect();
    assert_eq!(coalesced.len(), 1);
    assert_eq!(coalesced[0].range, 0..2);
}

#[test]
fn coalescing_keeps_distinct_ranges() {
    let doc = TextDocument::from("A") << StyleMarker::Bold << "B" << StyleMarker::Unbold << "C";
    let coalesced: Vec<_> = doc.resolved_ranges_coalesced().collect();
    assert_eq!(coalesced, doc.resolve());
}

#[test]
fn resolution_is_repeatable() {
    let inner = StyleMarker::Italic << "inner" << InlineObject::new(3, 4.0, 4.0);
    let doc = TextDocument::new()
        << Font::new("Menlo", 11.0)
        << "x"
        << &inner
        << StyleMarker::Bold
        << Link::new("https://example.invalid")
        << "y";
    let snapshot = doc.clone();
    let first = doc.resolve();
    let second = doc.resolve();
    assert_eq!(first, second);
    assert_eq!(doc, snapshot);
}

#[test]
fn matches_reference_resolution() {
    let base = Font::new("Helvetica", 13.0);
    let context = ResolveContext::new().with_base_font(base.clone());
    let inner = TextDocument::from("é")
        << StyleMarker::Emboss
        << "ñ"
        << InlineObject::new(9, 1.0, 1.0)
        << StyleMarker::Bold;
    let mut doc = TextDocument::new()
        << base.clone()
        << StyleMarker::Bold
        << "explicit "
        << StyleMarker::Unbold
        << "still explicit ";
    doc.clear_attribute(AttributeKey::Font);
    let doc = doc
        << StyleMarker::Italic
        << "hello "
        << palette::css::RED
        << Background(palette::css::BLACK)
        << "wörld"
        << &inner
        << StyleMarker::Unitalic
        << Link::new("https://example.invalid")
        << "!"
        << StyleMarker::NoUnderline
        << &inner
        << "end";

    let expected = reference_resolve(&doc, &base);
    let actual: Vec<_> = doc
        .resolve_with(&context)
        .into_iter()
        .map(|resolved| (resolved.range, resolved.attributes))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn unbalanced_pop_is_reported_by_try_resolve() {
    let doc = TextDocument::from_parts(
        "abc",
        vec![
            (1, Directive::Marker(StyleMarker::Push)),
            (2, Directive::Marker(StyleMarker::Pop)),
            (3, Directive::Marker(StyleMarker::Pop)),
        ],
    )
    .expect("positions are valid");
    let err = doc.try_resolve(&ResolveContext::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StackUnderflow);
    assert_eq!(err.index(), 2);
    assert_eq!(err.position(), 3);
}

#[test]
#[should_panic(expected = "popped an empty scope stack")]
fn unbalanced_pop_panics_on_resolve() {
    let doc = TextDocument::from("a") << StyleMarker::Pop << "b";
    let _ = doc.resolve();
}
