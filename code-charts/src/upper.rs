//! Devanagari Extended through Specials, U+A8E0..U+FFFD.

code_chart_group! {
    pub struct UpperCodeCharts("upper") {
        DEVANAGARI_EXTENDED = 0x1, DevanagariExtended, "Devanagari Extended" => [0xA8E0..=0xA8FB];
        KAYAH_LI = 0x2, KayahLi, "Kayah Li" => [0xA900..=0xA92F];
        REJANG = 0x4, Rejang, "Rejang" => [0xA930..=0xA953, 0xA95F..=0xA95F];
        HANGUL_JAMO_EXTENDED_A = 0x8, HangulJamoExtendedA, "Hangul Jamo Extended-A" => [
            0xA960..=0xA97C,
        ];
        JAVANESE = 0x10, Javanese, "Javanese" => [
            0xA980..=0xA9CD, 0xA9CF..=0xA9D9, 0xA9DE..=0xA9DF,
        ];
        CHAM = 0x20, Cham, "Cham" => [
            0xAA00..=0xAA36, 0xAA40..=0xAA4D, 0xAA50..=0xAA59, 0xAA5C..=0xAA5F,
        ];
        MYANMAR_EXTENDED_A = 0x40, MyanmarExtendedA, "Myanmar Extended-A" => [0xAA60..=0xAA7B];
        TAI_VIET = 0x80, TaiViet, "Tai Viet" => [0xAA80..=0xAAC2, 0xAADB..=0xAADF];
        MEETEI_MAYEK = 0x100, MeeteiMayek, "Meetei Mayek" => [0xABC0..=0xABED, 0xABF0..=0xABF9];
        HANGUL_SYLLABLES = 0x200, HangulSyllables, "Hangul Syllables" => [0xAC00..=0xD7A3];
        HANGUL_JAMO_EXTENDED_B = 0x400, HangulJamoExtendedB, "Hangul Jamo Extended-B" => [
            0xD7B0..=0xD7C6, 0xD7CB..=0xD7FB,
        ];
        CJK_COMPATIBILITY_IDEOGRAPHS = 0x800, CjkCompatibilityIdeographs, "CJK Compatibility Ideographs" => [
            0xF900..=0xFA2D, 0xFA30..=0xFA6D, 0xFA70..=0xFAD9,
        ];
        ALPHABETIC_PRESENTATION_FORMS = 0x1000, AlphabeticPresentationForms, "Alphabetic Presentation Forms" => [
            0xFB00..=0xFB06, 0xFB13..=0xFB17, 0xFB1D..=0xFB36, 0xFB38..=0xFB3C,
            0xFB3E..=0xFB3E, 0xFB40..=0xFB41, 0xFB43..=0xFB44, 0xFB46..=0xFB4F,
        ];
        ARABIC_PRESENTATION_FORMS_A = 0x2000, ArabicPresentationFormsA, "Arabic Presentation Forms A" => [
            0xFB50..=0xFBB1, 0xFBD3..=0xFD3F, 0xFD50..=0xFD8F, 0xFD92..=0xFDC7,
            0xFDF0..=0xFDFD,
        ];
        VARIATION_SELECTORS = 0x4000, VariationSelectors, "Variation Selectors" => [
            0xFE00..=0xFE0F,
        ];
        VERTICAL_FORMS = 0x8000, VerticalForms, "Vertical Forms" => [0xFE10..=0xFE19];
        COMBINING_HALF_MARKS = 0x1_0000, CombiningHalfMarks, "Combining Half Marks" => [
            0xFE20..=0xFE26,
        ];
        CJK_COMPATIBILITY_FORMS = 0x2_0000, CjkCompatibilityForms, "CJK Compatibility Forms" => [
            0xFE30..=0xFE4F,
        ];
        SMALL_FORM_VARIANTS = 0x4_0000, SmallFormVariants, "Small Form Variants" => [
            0xFE50..=0xFE52, 0xFE54..=0xFE66, 0xFE68..=0xFE6B,
        ];
        ARABIC_PRESENTATION_FORMS_B = 0x8_0000, ArabicPresentationFormsB, "Arabic Presentation Forms B" => [
            0xFE70..=0xFE74, 0xFE76..=0xFEFC,
        ];
        HALF_WIDTH_AND_FULL_WIDTH_FORMS = 0x10_0000, HalfWidthAndFullWidthForms, "Halfwidth and Fullwidth Forms" => [
            0xFF01..=0xFFBE, 0xFFC2..=0xFFC7, 0xFFCA..=0xFFCF, 0xFFD2..=0xFFD7,
            0xFFDA..=0xFFDC, 0xFFE0..=0xFFE6, 0xFFE8..=0xFFEE,
        ];
        SPECIALS = 0x20_0000, Specials, "Specials" => [0xFFF9..=0xFFFD];
    }
}
