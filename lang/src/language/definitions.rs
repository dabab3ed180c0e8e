use super::{Language, LanguageDefinition};
use std::sync::LazyLock;

static PYTHON: LazyLock<LanguageDefinition> = LazyLock::new(|| {
    LanguageDefinition::new(
        &[
            "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
            "continue", "def", "del", "elif", "else", "except", "finally", "for", "from",
            "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass",
            "raise", "return", "try", "while", "with", "yield",
        ],
        &[
            "print", "len", "range", "input", "open", "abs", "min", "max", "sum", "sorted",
            "reversed", "enumerate", "zip", "map", "filter", "isinstance", "round", "any",
            "all", "type", "iter", "next", "format", "repr", "hash", "id", "chr", "ord",
        ],
        &[
            "int", "float", "str", "bool", "list", "dict", "set", "tuple", "bytes", "complex",
            "object", "frozenset",
        ],
        &[
            "**=", "//=", ">>=", "<<=", "**", "//", "==", "!=", "<=", ">=", "+=", "-=", "*=",
            "/=", "%=", "&=", "|=", "^=", "->", ":=", "<<", ">>", "+", "-", "*", "/", "%", "=",
            "<", ">", "&", "|", "^", "~", "@", "(", ")", "[", "]", "{", "}", ",", ":", ";", ".",
        ],
        "#",
        None,
    )
});

static VB_NET: LazyLock<LanguageDefinition> = LazyLock::new(|| {
    LanguageDefinition::new(
        &[
            "Dim", "As", "If", "Then", "Else", "ElseIf", "End", "Sub", "Function", "Return",
            "For", "To", "Step", "Next", "Each", "In", "While", "Do", "Loop", "Until", "Select",
            "Case", "Module", "Class", "Structure", "Enum", "Interface", "Namespace", "Imports",
            "Public", "Private", "Protected", "Friend", "Shared", "Static", "Const", "New",
            "Nothing", "True", "False", "And", "Or", "Not", "AndAlso", "OrElse", "Xor", "Mod",
            "Is", "IsNot", "Try", "Catch", "Finally", "Throw", "Exit", "Continue", "ByVal",
            "ByRef", "Optional", "Call", "Me", "MyBase", "Property", "Get", "Set", "With",
            "ReDim", "Preserve", "Inherits", "Implements", "Overrides", "Overridable", "Of",
        ],
        &[
            "Console", "WriteLine", "Write", "ReadLine", "MsgBox", "InputBox", "Len", "Mid",
            "Left", "Right", "UCase", "LCase", "Trim", "InStr", "Val", "CInt", "CStr", "CDbl",
            "CBool", "CDate", "Math", "Convert",
        ],
        &[
            "Integer", "Long", "Short", "Byte", "Single", "Double", "Decimal", "String",
            "Boolean", "Char", "Date", "Object",
        ],
        &[
            "<>", "<=", ">=", "&=", "+=", "-=", "*=", "/=", "\\=", "^=", "<<", ">>", ":=", "=",
            "<", ">", "+", "-", "*", "/", "\\", "^", "&", "(", ")", "{", "}", ",", ".", ":",
            "!", "?",
        ],
        "'",
        None,
    )
});

static JAVA: LazyLock<LanguageDefinition> = LazyLock::new(|| {
    LanguageDefinition::new(
        &[
            "abstract", "assert", "break", "case", "catch", "class", "const", "continue",
            "default", "do", "else", "enum", "extends", "final", "finally", "for", "goto", "if",
            "implements", "import", "instanceof", "interface", "native", "new", "package",
            "private", "protected", "public", "return", "static", "strictfp", "super", "switch",
            "synchronized", "this", "throw", "throws", "transient", "try", "volatile", "while",
            "var", "record", "true", "false", "null",
        ],
        &[
            "System", "Math", "Arrays", "Collections", "Objects", "println", "print", "printf",
        ],
        &[
            "int", "long", "short", "byte", "float", "double", "boolean", "char", "void",
            "String", "Integer", "Long", "Double", "Float", "Boolean", "Character", "Object",
            "List", "ArrayList", "Map", "HashMap", "Set", "HashSet", "Scanner", "StringBuilder",
        ],
        &[
            ">>>=", "<<=", ">>=", ">>>", "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=",
            "-=", "*=", "/=", "%=", "&=", "|=", "^=", "->", "::", "<<", ">>", "+", "-", "*",
            "/", "%", "=", "<", ">", "!", "~", "?", ":", "&", "|", "^", "(", ")", "[", "]",
            "{", "}", ";", ",", ".", "@",
        ],
        "//",
        Some(("/*", "*/")),
    )
});

/// Look up the shared definition table for `language`.
pub fn definition(language: Language) -> &'static LanguageDefinition {
    match language {
        Language::Python => &PYTHON,
        Language::VbNet => &VB_NET,
        Language::Java => &JAVA,
    }
}
