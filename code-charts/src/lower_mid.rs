//! Myanmar through Latin Extended Additional, U+1000..U+1EFF.

code_chart_group! {
    /// Blocks of the lower-middle range.
    pub struct LowerMidCodeCharts("lower-mid") {
        MYANMAR = 0x1, Myanmar, "Myanmar" => [0x1000..=0x109F];
        GEORGIAN = 0x2, Georgian, "Georgian" => [0x10A0..=0x10C5, 0x10D0..=0x10FC];
        HANGUL_JAMO = 0x4, HangulJamo, "Hangul Jamo" => [0x1100..=0x11FF];
        ETHIOPIC = 0x8, Ethiopic, "Ethiopic" => [
            0x1200..=0x1248, 0x124A..=0x124D, 0x1250..=0x1256, 0x1258..=0x1258,
            0x125A..=0x125D, 0x1260..=0x1288, 0x128A..=0x128D, 0x1290..=0x12B0,
            0x12B2..=0x12B5, 0x12B8..=0x12BE, 0x12C0..=0x12C0, 0x12C2..=0x12C5,
            0x12C8..=0x12D6, 0x12D8..=0x1310, 0x1312..=0x1315, 0x1318..=0x135A,
            0x135F..=0x137C,
        ];
        ETHIOPIC_SUPPLEMENT = 0x10, EthiopicSupplement, "Ethiopic Supplement" => [0x1380..=0x1399];
        CHEROKEE = 0x20, Cherokee, "Cherokee" => [0x13A0..=0x13F4];
        UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS = 0x40, UnifiedCanadianAboriginalSyllabics, "Unified Canadian Aboriginal Syllabics" => [
            0x1400..=0x167F,
        ];
        OGHAM = 0x80, Ogham, "Ogham" => [0x1680..=0x169C];
        RUNIC = 0x100, Runic, "Runic" => [0x16A0..=0x16F0];
        TAGALOG = 0x200, Tagalog, "Tagalog" => [0x1700..=0x170C, 0x170E..=0x1714];
        HANUNOO = 0x400, Hanunoo, "Hanunoo" => [0x1720..=0x1736];
        BUHID = 0x800, Buhid, "Buhid" => [0x1740..=0x1753];
        TAGBANWA = 0x1000, Tagbanwa, "Tagbanwa" => [
            0x1760..=0x176C, 0x176E..=0x1770, 0x1772..=0x1773,
        ];
        KHMER = 0x2000, Khmer, "Khmer" => [0x1780..=0x17DD, 0x17E0..=0x17E9, 0x17F0..=0x17F9];
        MONGOLIAN = 0x4000, Mongolian, "Mongolian" => [
            0x1800..=0x180E, 0x1810..=0x1819, 0x1820..=0x1877, 0x1880..=0x18AA,
        ];
        UNIFIED_CANADIAN_ABORIGINAL_SYLLABICS_EXTENDED = 0x8000, UnifiedCanadianAboriginalSyllabicsExtended, "Unified Canadian Aboriginal Syllabics Extended" => [
            0x18B0..=0x18F5,
        ];
        LIMBU = 0x1_0000, Limbu, "Limbu" => [
            0x1900..=0x191C, 0x1920..=0x192B, 0x1930..=0x193B, 0x1940..=0x1940,
            0x1944..=0x194F,
        ];
        TAI_LE = 0x2_0000, TaiLe, "Tai Le" => [0x1950..=0x196D, 0x1970..=0x1974];
        NEW_TAI_LUE = 0x4_0000, NewTaiLue, "New Tai Lue" => [
            0x1980..=0x19AB, 0x19B0..=0x19C9, 0x19D0..=0x19DA, 0x19DE..=0x19DF,
        ];
        KHMER_SYMBOLS = 0x8_0000, KhmerSymbols, "Khmer Symbols" => [0x19E0..=0x19FF];
        BUGINESE = 0x10_0000, Buginese, "Buginese" => [0x1A00..=0x1A1B, 0x1A1E..=0x1A1F];
        TAI_THAM = 0x20_0000, TaiTham, "Tai Tham" => [
            0x1A20..=0x1A5E, 0x1A60..=0x1A7C, 0x1A7F..=0x1A89, 0x1A90..=0x1A99,
            0x1AA0..=0x1AAD,
        ];
        BALINESE = 0x40_0000, Balinese, "Balinese" => [0x1B00..=0x1B4B, 0x1B50..=0x1B7C];
        SUDANESE = 0x80_0000, Sudanese, "Sudanese" => [0x1B80..=0x1BAA, 0x1BAE..=0x1BB9];
        LEPCHA = 0x100_0000, Lepcha, "Lepcha" => [
            0x1C00..=0x1C37, 0x1C3B..=0x1C49, 0x1C4D..=0x1C4F,
        ];
        OL_CHIKI = 0x200_0000, OlChiki, "Ol Chiki" => [0x1C50..=0x1C7F];
        VEDIC_EXTENSIONS = 0x400_0000, VedicExtensions, "Vedic Extensions" => [0x1CD0..=0x1CF2];
        PHONETIC_EXTENSIONS = 0x800_0000, PhoneticExtensions, "Phonetic Extensions" => [
            0x1D00..=0x1D7F,
        ];
        PHONETIC_EXTENSIONS_SUPPLEMENT = 0x1000_0000, PhoneticExtensionsSupplement, "Phonetic Extensions Supplement" => [
            0x1D80..=0x1DBF,
        ];
        COMBINING_DIACRITICAL_MARKS_SUPPLEMENT = 0x2000_0000, CombiningDiacriticalMarksSupplement, "Combining Diacritical Marks Supplement" => [
            0x1DC0..=0x1DE6, 0x1DFD..=0x1DFF,
        ];
        LATIN_EXTENDED_ADDITIONAL = 0x4000_0000, LatinExtendedAdditional, "Latin Extended Additional" => [
            0x1E00..=0x1EFF,
        ];
    }
}
