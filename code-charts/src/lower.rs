//! Basic Latin through Tibetan, U+0020..U+0FD8.

code_chart_group! {
    /// Blocks of the lower range: Latin, Greek, Cyrillic, the Middle Eastern
    /// scripts and the Indic scripts through Tibetan.
    pub struct LowerCodeCharts("lower") {
        BASIC_LATIN = 0x1, BasicLatin, "Basic Latin" => [0x0020..=0x007E];
        C1_CONTROLS_AND_LATIN1_SUPPLEMENT = 0x2, C1ControlsAndLatin1Supplement, "C1 Controls and Latin-1 Supplement" => [
            0x00A1..=0x00AC, 0x00AE..=0x00FF,
        ];
        LATIN_EXTENDED_A = 0x4, LatinExtendedA, "Latin Extended-A" => [0x0100..=0x017F];
        LATIN_EXTENDED_B = 0x8, LatinExtendedB, "Latin Extended-B" => [0x0180..=0x024F];
        IPA_EXTENSIONS = 0x10, IpaExtensions, "IPA Extensions" => [0x0250..=0x02AF];
        SPACING_MODIFIER_LETTERS = 0x20, SpacingModifierLetters, "Spacing Modifier Letters" => [
            0x02B0..=0x02FF,
        ];
        COMBINING_DIACRITICAL_MARKS = 0x40, CombiningDiacriticalMarks, "Combining Diacritical Marks" => [
            0x0300..=0x036F,
        ];
        GREEK_AND_COPTIC = 0x80, GreekAndCoptic, "Greek and Coptic" => [
            0x0370..=0x0377, 0x037A..=0x037E, 0x0384..=0x038A, 0x038C..=0x038C,
            0x038E..=0x03A1, 0x03A3..=0x03FF,
        ];
        CYRILLIC = 0x100, Cyrillic, "Cyrillic" => [0x0400..=0x04FF];
        CYRILLIC_SUPPLEMENT = 0x200, CyrillicSupplement, "Cyrillic Supplement" => [0x0500..=0x0525];
        ARMENIAN = 0x400, Armenian, "Armenian" => [
            0x0531..=0x0556, 0x0559..=0x055F, 0x0561..=0x0587, 0x0589..=0x058A,
        ];
        HEBREW = 0x800, Hebrew, "Hebrew" => [0x0591..=0x05C7, 0x05D0..=0x05EA, 0x05F0..=0x05F4];
        ARABIC = 0x1000, Arabic, "Arabic" => [
            0x0600..=0x0603, 0x0606..=0x061B, 0x061E..=0x061F, 0x0621..=0x065E,
            0x0660..=0x06FF,
        ];
        SYRIAC = 0x2000, Syriac, "Syriac" => [0x0700..=0x070D, 0x070F..=0x074A, 0x074D..=0x074F];
        ARABIC_SUPPLEMENT = 0x4000, ArabicSupplement, "Arabic Supplement" => [0x0750..=0x077F];
        THAANA = 0x8000, Thaana, "Thaana" => [0x0780..=0x07B1];
        NKO = 0x1_0000, Nko, "NKo" => [0x07C0..=0x07FA];
        SAMARITAN = 0x2_0000, Samaritan, "Samaritan" => [0x0800..=0x082D, 0x0830..=0x083E];
        DEVANAGARI = 0x4_0000, Devanagari, "Devanagari" => [
            0x0900..=0x0939, 0x093C..=0x094E, 0x0950..=0x0955, 0x0958..=0x0972,
            0x0979..=0x097F,
        ];
        BENGALI = 0x8_0000, Bengali, "Bengali" => [
            0x0981..=0x0983, 0x0985..=0x098C, 0x098F..=0x0990, 0x0993..=0x09A8,
            0x09AA..=0x09B0, 0x09B2..=0x09B2, 0x09B6..=0x09B9, 0x09BC..=0x09C4,
            0x09C7..=0x09C8, 0x09CB..=0x09CE, 0x09D7..=0x09D7, 0x09DC..=0x09DD,
            0x09DF..=0x09E3, 0x09E6..=0x09FB,
        ];
        GURMUKHI = 0x10_0000, Gurmukhi, "Gurmukhi" => [
            0x0A01..=0x0A03, 0x0A05..=0x0A0A, 0x0A0F..=0x0A10, 0x0A13..=0x0A28,
            0x0A2A..=0x0A30, 0x0A32..=0x0A33, 0x0A35..=0x0A36, 0x0A38..=0x0A39,
            0x0A3C..=0x0A3C, 0x0A3E..=0x0A42, 0x0A47..=0x0A48, 0x0A4B..=0x0A4D,
            0x0A51..=0x0A51, 0x0A59..=0x0A5C, 0x0A5E..=0x0A5E, 0x0A66..=0x0A75,
        ];
        GUJARATI = 0x20_0000, Gujarati, "Gujarati" => [
            0x0A81..=0x0A83, 0x0A85..=0x0A8D, 0x0A8F..=0x0A91, 0x0A93..=0x0AA8,
            0x0AAA..=0x0AB0, 0x0AB2..=0x0AB3, 0x0AB5..=0x0AB9, 0x0ABC..=0x0AC5,
            0x0AC7..=0x0AC9, 0x0ACB..=0x0ACD, 0x0AD0..=0x0AD0, 0x0AE0..=0x0AE3,
            0x0AE6..=0x0AEF, 0x0AF1..=0x0AF1,
        ];
        ORIYA = 0x40_0000, Oriya, "Oriya" => [
            0x0B01..=0x0B03, 0x0B05..=0x0B0C, 0x0B0F..=0x0B10, 0x0B13..=0x0B28,
            0x0B2A..=0x0B30, 0x0B32..=0x0B33, 0x0B35..=0x0B39, 0x0B3C..=0x0B44,
            0x0B47..=0x0B48, 0x0B4B..=0x0B4D, 0x0B56..=0x0B57, 0x0B5C..=0x0B5D,
            0x0B5F..=0x0B63, 0x0B66..=0x0B71,
        ];
        TAMIL = 0x80_0000, Tamil, "Tamil" => [
            0x0B82..=0x0B83, 0x0B85..=0x0B8A, 0x0B8E..=0x0B90, 0x0B92..=0x0B95,
            0x0B99..=0x0B9A, 0x0B9C..=0x0B9C, 0x0B9E..=0x0B9F, 0x0BA3..=0x0BA4,
            0x0BA8..=0x0BAA, 0x0BAE..=0x0BB9, 0x0BBE..=0x0BC2, 0x0BC6..=0x0BC8,
            0x0BCA..=0x0BCD, 0x0BD0..=0x0BD0, 0x0BD7..=0x0BD7, 0x0BE6..=0x0BFA,
        ];
        TELUGU = 0x100_0000, Telugu, "Telugu" => [
            0x0C01..=0x0C03, 0x0C05..=0x0C0C, 0x0C0E..=0x0C10, 0x0C12..=0x0C28,
            0x0C2A..=0x0C33, 0x0C35..=0x0C39, 0x0C3D..=0x0C44, 0x0C46..=0x0C48,
            0x0C4A..=0x0C4D, 0x0C55..=0x0C56, 0x0C58..=0x0C59, 0x0C60..=0x0C63,
            0x0C66..=0x0C6F, 0x0C78..=0x0C7F,
        ];
        KANNADA = 0x200_0000, Kannada, "Kannada" => [
            0x0C82..=0x0C83, 0x0C85..=0x0C8C, 0x0C8E..=0x0C90, 0x0C92..=0x0CA8,
            0x0CAA..=0x0CB3, 0x0CB5..=0x0CB9, 0x0CBC..=0x0CC4, 0x0CC6..=0x0CC8,
            0x0CCA..=0x0CCD, 0x0CD5..=0x0CD6, 0x0CDE..=0x0CDE, 0x0CE0..=0x0CE3,
            0x0CE6..=0x0CEF, 0x0CF1..=0x0CF2,
        ];
        MALAYALAM = 0x400_0000, Malayalam, "Malayalam" => [
            0x0D02..=0x0D03, 0x0D05..=0x0D0C, 0x0D0E..=0x0D10, 0x0D12..=0x0D28,
            0x0D2A..=0x0D39, 0x0D3D..=0x0D44, 0x0D46..=0x0D48, 0x0D4A..=0x0D4D,
            0x0D57..=0x0D57, 0x0D60..=0x0D63, 0x0D66..=0x0D75, 0x0D79..=0x0D7F,
        ];
        SINHALA = 0x800_0000, Sinhala, "Sinhala" => [
            0x0D82..=0x0D83, 0x0D85..=0x0D96, 0x0D9A..=0x0DB1, 0x0DB3..=0x0DBB,
            0x0DBD..=0x0DBD, 0x0DC0..=0x0DC6, 0x0DCA..=0x0DCA, 0x0DCF..=0x0DD4,
            0x0DD6..=0x0DD6, 0x0DD8..=0x0DDF, 0x0DF2..=0x0DF4,
        ];
        THAI = 0x1000_0000, Thai, "Thai" => [0x0E01..=0x0E3A, 0x0E3F..=0x0E5B];
        LAO = 0x2000_0000, Lao, "Lao" => [
            0x0E81..=0x0E82, 0x0E84..=0x0E84, 0x0E87..=0x0E88, 0x0E8A..=0x0E8A,
            0x0E8D..=0x0E8D, 0x0E94..=0x0E97, 0x0E99..=0x0E9F, 0x0EA1..=0x0EA3,
            0x0EA5..=0x0EA5, 0x0EA7..=0x0EA7, 0x0EAA..=0x0EAB, 0x0EAD..=0x0EB9,
            0x0EBB..=0x0EBD, 0x0EC0..=0x0EC4, 0x0EC6..=0x0EC6, 0x0EC8..=0x0ECD,
            0x0ED0..=0x0ED9, 0x0EDC..=0x0EDD,
        ];
        TIBETAN = 0x4000_0000, Tibetan, "Tibetan" => [
            0x0F00..=0x0F47, 0x0F49..=0x0F6C, 0x0F71..=0x0F8B, 0x0F90..=0x0F97,
            0x0F99..=0x0FBC, 0x0FBE..=0x0FCC, 0x0FCE..=0x0FD8,
        ];
    }
}

impl LowerCodeCharts {
    /// Basic Latin through Combining Diacritical Marks.
    pub const DEFAULT: Self = Self(0x7F);
}
