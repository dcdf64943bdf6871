//! Greek Extended through Ethiopic Extended, U+1F00..U+2DDE.

code_chart_group! {
    /// Blocks of the middle range: punctuation, symbols, arrows and a handful of scripts.
    pub struct MidCodeCharts("mid") {
        GREEK_EXTENDED = 0x1, GreekExtended, "Greek Extended" => [
            0x1F00..=0x1F15, 0x1F18..=0x1F1D, 0x1F20..=0x1F45, 0x1F48..=0x1F4D,
            0x1F50..=0x1F57, 0x1F59..=0x1F59, 0x1F5B..=0x1F5B, 0x1F5D..=0x1F5D,
            0x1F5F..=0x1F7D, 0x1F80..=0x1FB4, 0x1FB6..=0x1FC4, 0x1FC6..=0x1FD3,
            0x1FD6..=0x1FDB, 0x1FDD..=0x1FEF, 0x1FF2..=0x1FF4, 0x1FF6..=0x1FFE,
        ];
        GENERAL_PUNCTUATION = 0x2, GeneralPunctuation, "General Punctuation" => [
            0x2000..=0x2064, 0x206A..=0x206F,
        ];
        SUPERSCRIPTS_AND_SUBSCRIPTS = 0x4, SuperscriptsAndSubscripts, "Superscripts and Subscripts" => [
            0x2070..=0x2071, 0x2074..=0x208E, 0x2090..=0x2094,
        ];
        CURRENCY_SYMBOLS = 0x8, CurrencySymbols, "Currency Symbols" => [0x20A0..=0x20B8];
        COMBINING_DIACRITICAL_MARKS_FOR_SYMBOLS = 0x10, CombiningDiacriticalMarksForSymbols, "Combining Diacritical Marks for Symbols" => [
            0x20D0..=0x20F0,
        ];
        LETTERLIKE_SYMBOLS = 0x20, LetterlikeSymbols, "Letterlike Symbols" => [0x2100..=0x214F];
        NUMBER_FORMS = 0x40, NumberForms, "Number Forms" => [0x2150..=0x2189];
        ARROWS = 0x80, Arrows, "Arrows" => [0x2190..=0x21FF];
        MATHEMATICAL_OPERATORS = 0x100, MathematicalOperators, "Mathematical Operators" => [
            0x2200..=0x22FF,
        ];
        MISCELLANEOUS_TECHNICAL = 0x200, MiscellaneousTechnical, "Miscellaneous Technical" => [
            0x2300..=0x23E8,
        ];
        CONTROL_PICTURES = 0x400, ControlPictures, "Control Pictures" => [0x2400..=0x2426];
        OPTICAL_CHARACTER_RECOGNITION = 0x800, OpticalCharacterRecognition, "Optical Character Recognition" => [
            0x2440..=0x244A,
        ];
        ENCLOSED_ALPHANUMERICS = 0x1000, EnclosedAlphanumerics, "Enclosed Alphanumerics" => [
            0x2460..=0x24FF,
        ];
        BOX_DRAWING = 0x2000, BoxDrawing, "Box Drawing" => [0x2500..=0x257F];
        BLOCK_ELEMENTS = 0x4000, BlockElements, "Block Elements" => [0x2580..=0x259F];
        GEOMETRIC_SHAPES = 0x8000, GeometricShapes, "Geometric Shapes" => [0x25A0..=0x25FF];
        MISCELLANEOUS_SYMBOLS = 0x1_0000, MiscellaneousSymbols, "Miscellaneous Symbols" => [
            0x2600..=0x26CD, 0x26CF..=0x26E1, 0x26E3..=0x26E3, 0x26E8..=0x26FF,
        ];
        DINGBATS = 0x2_0000, Dingbats, "Dingbats" => [
            0x2701..=0x2704, 0x2706..=0x2709, 0x270C..=0x2727, 0x2729..=0x274B,
            0x274D..=0x274D, 0x274F..=0x2752, 0x2756..=0x275E, 0x2761..=0x2794,
            0x2798..=0x27AF, 0x27B1..=0x27BE,
        ];
        MISCELLANEOUS_MATHEMATICAL_SYMBOLS_A = 0x4_0000, MiscellaneousMathematicalSymbolsA, "Miscellaneous Mathematical Symbols-A" => [
            0x27C0..=0x27CA, 0x27CC..=0x27CC, 0x27D0..=0x27EF,
        ];
        SUPPLEMENTAL_ARROWS_A = 0x8_0000, SupplementalArrowsA, "Supplemental Arrows-A" => [
            0x27F0..=0x27FF,
        ];
        BRAILLE_PATTERNS = 0x10_0000, BraillePatterns, "Braille Patterns" => [0x2800..=0x28FF];
        SUPPLEMENTAL_ARROWS_B = 0x20_0000, SupplementalArrowsB, "Supplemental Arrows-B" => [
            0x2900..=0x297F,
        ];
        MISCELLANEOUS_MATHEMATICAL_SYMBOLS_B = 0x40_0000, MiscellaneousMathematicalSymbolsB, "Miscellaneous Mathematical Symbols-B" => [
            0x2980..=0x29FF,
        ];
        SUPPLEMENTAL_MATHEMATICAL_OPERATORS = 0x80_0000, SupplementalMathematicalOperators, "Supplemental Mathematical Operators" => [
            0x2A00..=0x2AFF,
        ];
        MISCELLANEOUS_SYMBOLS_AND_ARROWS = 0x100_0000, MiscellaneousSymbolsAndArrows, "Miscellaneous Symbols and Arrows" => [
            0x2B00..=0x2B4C, 0x2B50..=0x2B59,
        ];
        GLAGOLITIC = 0x200_0000, Glagolitic, "Glagolitic" => [0x2C00..=0x2C2E, 0x2C30..=0x2C5E];
        LATIN_EXTENDED_C = 0x400_0000, LatinExtendedC, "Latin Extended C" => [0x2C60..=0x2C7F];
        COPTIC = 0x800_0000, Coptic, "Coptic" => [0x2C80..=0x2CF1, 0x2CF9..=0x2CFF];
        GEORGIAN_SUPPLEMENT = 0x1000_0000, GeorgianSupplement, "Georgian Supplement" => [
            0x2D00..=0x2D25,
        ];
        TIFINAGH = 0x2000_0000, Tifinagh, "Tifinagh" => [0x2D30..=0x2D65, 0x2D6F..=0x2D6F];
        ETHIOPIC_EXTENDED = 0x4000_0000, EthiopicExtended, "Ethiopic Extended" => [
            0x2D80..=0x2D96, 0x2DA0..=0x2DA6, 0x2DA8..=0x2DAE, 0x2DB0..=0x2DB6,
            0x2DB8..=0x2DBE, 0x2DC0..=0x2DC6, 0x2DC8..=0x2DCE, 0x2DD0..=0x2DD6,
            0x2DD8..=0x2DDE,
        ];
    }
}
