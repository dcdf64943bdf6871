//! Cyrillic Extended-A through Saurashtra, U+2DE0..U+A8D9.

code_chart_group! {
    /// Blocks of the upper-middle range, including the CJK ideographs.
    pub struct UpperMidCodeCharts("upper-mid") {
        CYRILLIC_EXTENDED_A = 0x1, CyrillicExtendedA, "Cyrillic Extended-A" => [0x2DE0..=0x2DFF];
        SUPPLEMENTAL_PUNCTUATION = 0x2, SupplementalPunctuation, "Supplemental Punctuation" => [
            0x2E00..=0x2E31,
        ];
        CJK_RADICALS_SUPPLEMENT = 0x4, CjkRadicalsSupplement, "CJK Radicals Supplement" => [
            0x2E80..=0x2E99, 0x2E9B..=0x2EF3,
        ];
        KANGXI_RADICALS = 0x8, KangxiRadicals, "Kangxi Radicals" => [0x2F00..=0x2FD5];
        IDEOGRAPHIC_DESCRIPTION_CHARACTERS = 0x10, IdeographicDescriptionCharacters, "Ideographic Description Characters" => [
            0x2FF0..=0x2FFB,
        ];
        CJK_SYMBOLS_AND_PUNCTUATION = 0x20, CjkSymbolsAndPunctuation, "CJK Symbols and Punctuation" => [
            0x3000..=0x303F,
        ];
        HIRAGANA = 0x40, Hiragana, "Hiragana" => [0x3041..=0x3096, 0x3099..=0x309F];
        KATAKANA = 0x80, Katakana, "Katakana" => [0x30A0..=0x30FF];
        BOPOMOFO = 0x100, Bopomofo, "Bopomofo" => [0x3105..=0x312D];
        HANGUL_COMPATIBILITY_JAMO = 0x200, HangulCompatibilityJamo, "Hangul Compatibility Jamo" => [
            0x3131..=0x318E,
        ];
        KANBUN = 0x400, Kanbun, "Kanbun" => [0x3190..=0x319F];
        BOPOMOFO_EXTENDED = 0x800, BopomofoExtended, "Bopomofo Extended" => [0x31A0..=0x31B7];
        CJK_STROKES = 0x1000, CjkStrokes, "CJK Strokes" => [0x31C0..=0x31E3];
        KATAKANA_PHONETIC_EXTENSIONS = 0x2000, KatakanaPhoneticExtensions, "Katakana Phonetic Extensions" => [
            0x31F0..=0x31FF,
        ];
        ENCLOSED_CJK_LETTERS_AND_MONTHS = 0x4000, EnclosedCjkLettersAndMonths, "Enclosed CJK Letters and Months" => [
            0x3200..=0x321E, 0x3220..=0x32FE,
        ];
        CJK_COMPATIBILITY = 0x8000, CjkCompatibility, "CJK Compatibility" => [0x3300..=0x33FF];
        CJK_UNIFIED_IDEOGRAPHS_EXTENSION_A = 0x1_0000, CjkUnifiedIdeographsExtensionA, "CJK Unified Ideographs Extension A" => [
            0x3400..=0x4DB5,
        ];
        YIJING_HEXAGRAM_SYMBOLS = 0x2_0000, YijingHexagramSymbols, "Yijing Hexagram Symbols" => [
            0x4DC0..=0x4DFF,
        ];
        CJK_UNIFIED_IDEOGRAPHS = 0x4_0000, CjkUnifiedIdeographs, "CJK Unified Ideographs" => [
            0x4E00..=0x9FCB,
        ];
        YI_SYLLABLES = 0x8_0000, YiSyllables, "Yi Syllables" => [0xA000..=0xA48C];
        YI_RADICALS = 0x10_0000, YiRadicals, "Yi Radicals" => [0xA490..=0xA4C6];
        LISU = 0x20_0000, Lisu, "Lisu" => [0xA4D0..=0xA4FF];
        VAI = 0x40_0000, Vai, "Vai" => [0xA500..=0xA62B];
        CYRILLIC_EXTENDED_B = 0x80_0000, CyrillicExtendedB, "Cyrillic Extended-B" => [
            0xA640..=0xA65F, 0xA662..=0xA673, 0xA67C..=0xA697,
        ];
        BAMUM = 0x100_0000, Bamum, "Bamum" => [0xA6A0..=0xA6F7];
        MODIFIER_TONE_LETTERS = 0x200_0000, ModifierToneLetters, "Modifier Tone Letters" => [
            0xA700..=0xA71F,
        ];
        LATIN_EXTENDED_D = 0x400_0000, LatinExtendedD, "Latin Extended D" => [
            0xA720..=0xA78C, 0xA7FB..=0xA7FF,
        ];
        SYLOTI_NAGRI = 0x800_0000, SylotiNagri, "Syloti Nagri" => [0xA800..=0xA82B];
        COMMON_INDIC_NUMBER_FORMS = 0x1000_0000, CommonIndicNumberForms, "Common Indic Number Forms" => [
            0xA830..=0xA839,
        ];
        PHAGSPA = 0x2000_0000, Phagspa, "Phags-pa" => [0xA840..=0xA877];
        SAURASHTRA = 0x4000_0000, Saurashtra, "Saurashtra" => [0xA880..=0xA8C4, 0xA8CE..=0xA8D9];
    }
}
