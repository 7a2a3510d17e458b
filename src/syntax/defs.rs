//! Shared token tables
//!
//! The single source of truth for keywords, builtins, functions, operators,
//! constants and type names of each language. Both tokenizer paths and the
//! completion lists are built from these tables; nothing else may carry the
//! literals. The lists are not validated for duplicates or empty strings.

use crate::language::Language;

/// Literal token lists for one language
///
/// Lists a language does not have are empty. Order matters only where a
/// list feeds a regex alternation: earlier entries win ties.
pub struct TokenTables {
    /// Keywords and transforming commands
    pub keywords: &'static [&'static str],
    /// Built-in commands and clause modifiers
    pub builtins: &'static [&'static str],
    /// Function names
    pub functions: &'static [&'static str],
    /// Word-form logical operators
    pub operators: &'static [&'static str],
    /// Word-form comparison operators
    pub comparison_operators: &'static [&'static str],
    /// Constants
    pub constants: &'static [&'static str],
    /// Data type names
    pub types: &'static [&'static str],
    /// Well-known field names
    pub common_fields: &'static [&'static str],
    /// Search time-range modifiers
    pub time_modifiers: &'static [&'static str],
    /// Scope/behavior flags of the `set` builtin
    pub set_scopes: &'static [&'static str],
    /// Operators of `test` and `[`
    pub test_operators: &'static [&'static str],
}

const EMPTY: &[&str] = &[];

/// Splunk SPL
pub static SPL: TokenTables = TokenTables {
    keywords: &[
        // Core search commands
        "search", "where", "table", "fields", "rename", "sort", "head", "tail", "dedup",
        "return", "format", "rex", "erex", "extract", "kvform", "multikv", "xmlkv", "spath",
        // Statistical commands
        "stats", "chart", "timechart", "streamstats", "eventstats", "sistats", "sitimechart",
        "sichart", "top", "rare", "sirare", "sitop", "contingency", "correlate",
        // Grouping and time
        "bin", "bucket", "autoregress", "delta", "accum", "streamstats",
        // Multivalue
        "makemv", "mvexpand", "mvzip", "mvcombine", "nomv",
        // Lookup and join
        "lookup", "inputlookup", "outputlookup", "join", "append", "appendcols", "appendpipe",
        "selfjoin", "set", "diff", "union",
        // Subsearch and control
        "map", "foreach", "return", "format",
        // Filling and formatting
        "fillnull", "filldown", "makecontinuous", "untable", "xyseries", "transpose",
        // Advanced analytics
        "predict", "x11", "trendline", "outlier", "cluster", "kmeans", "anomalies",
        "anomalydetection", "anomalousvalue",
        // Transforming
        "convert", "eval", "replace", "addinfo", "addtotals", "addcoltotals",
        // Geo and time
        "geostats", "geom", "iplocation", "localize", "reltime", "gentimes", "timewrap",
        // Other commands
        "collect", "overlap", "transaction", "metadata", "typelearner", "typer",
        "rest", "savedsearch", "script", "crawl", "fieldformat", "gauge",
        "makeresults", "sendemail",
    ],
    builtins: &[
        "as", "by", "over", "span", "limit", "useother", "usenull", "otherstr",
        "cont", "bins", "start", "end", "aligntime", "dedup_splitvals",
        "allnum", "sep", "delim", "keepevents", "maxsuppress", "maxpause",
        "maxspan", "startswith", "endswith", "maxevents", "unroll",
    ],
    functions: &[
        // Aggregate functions
        "avg", "c", "count", "dc", "distinct_count", "earliest", "earliest_time",
        "estdc", "estdc_error", "exactperc", "first", "last", "latest",
        "latest_time", "list", "max", "mean", "median", "min", "mode",
        "perc", "percentile", "range", "rate", "stdev", "stdevp", "sum",
        "sumsq", "upperperc", "values", "var", "varp", "per_day", "per_hour",
        "per_minute", "per_second",
        // String functions
        "substr", "len", "lower", "upper", "trim", "ltrim", "rtrim", "replace",
        "split", "spath", "urldecode", "tostring", "printf", "tonumber", "md5",
        "sha1", "sha256", "sha512", "json_object", "json_array", "json_extract",
        "json_extract_exact", "mvzip", "mvjoin", "mvindex", "mvcount", "mvfilter",
        "mvappend", "mvdedup", "mvsort", "mvfind", "mvrange",
        // Time functions
        "now", "time", "relative_time", "strftime", "strptime",
        // Math functions
        "abs", "ceil", "floor", "round", "sqrt", "exp", "ln", "log", "pow",
        "exact", "random", "sigfig", "pi", "sin", "cos", "tan", "asin", "acos", "atan",
        "atan2", "cosh", "sinh", "tanh", "hypot", "degrees", "radians",
        // Conditional functions
        "if", "case", "match", "like", "searchmatch", "cidrmatch", "validate",
        "commands", "typeof", "isnull", "isnotnull", "isnum", "isint", "isstr",
        "isbool", "coalesce", "null", "nullif", "true", "false", "tonum", "tobool",
        // Multivalue aggregation
        "mv_to_json_array", "mvmap",
    ],
    operators: &["AND", "OR", "NOT", "XOR"],
    comparison_operators: &["IN", "LIKE"],
    constants: EMPTY,
    types: EMPTY,
    common_fields: &[
        "index", "source", "sourcetype", "host", "_time", "_raw", "_indextime",
        "splunk_server", "tag", "eventtype", "linecount", "punct", "timestartpos",
        "timeendpos", "date_hour", "date_mday", "date_minute", "date_month",
        "date_second", "date_wday", "date_year", "date_zone",
    ],
    time_modifiers: &[
        "earliest", "latest", "starttime", "endtime", "startdaysago", "enddaysago",
        "startminutesago", "endminutesago", "starthoursago", "endhoursago",
        "startmonthsago", "endmonthsago", "starttimeu", "endtimeu",
    ],
    set_scopes: EMPTY,
    test_operators: EMPTY,
};

/// Elasticsearch ES|QL
pub static ESQL: TokenTables = TokenTables {
    keywords: &[
        "FROM", "WHERE", "LIMIT", "SORT", "STATS", "BY", "AS",
        "KEEP", "DROP", "RENAME", "EVAL", "ROW", "SHOW", "ENRICH",
        "DISSECT", "GROK", "MV_EXPAND", "INLINESTATS", "LOOKUP",
        "WITH", "METADATA", "INFO", "FUNCTIONS", "ASC", "DESC",
        "NULLS", "FIRST", "LAST",
    ],
    builtins: EMPTY,
    functions: &[
        // Aggregate functions
        "AVG", "COUNT", "COUNT_DISTINCT", "MAX", "MIN", "SUM", "MEDIAN",
        "PERCENTILE", "VALUES", "TOP", "WEIGHTED_AVG",
        // String functions
        "CONCAT", "LEFT", "RIGHT", "LENGTH", "LOCATE", "LTRIM", "RTRIM", "TRIM",
        "REPLACE", "SUBSTRING", "UPPER", "LOWER", "STARTS_WITH", "ENDS_WITH",
        "SPLIT", "REVERSE",
        // Type conversion functions
        "TO_STRING", "TO_BOOLEAN", "TO_CARTESIANPOINT", "TO_DATETIME",
        "TO_DEGREES", "TO_DOUBLE", "TO_GEOPOINT", "TO_GEOSHAPE", "TO_INTEGER",
        "TO_IP", "TO_LONG", "TO_RADIANS", "TO_UNSIGNED_LONG", "TO_VERSION",
        // Date functions
        "NOW", "DATE_EXTRACT", "DATE_FORMAT", "DATE_PARSE", "DATE_TRUNC",
        "DATEPART", "AUTO_BUCKET",
        // Math functions
        "ABS", "ACOS", "ASIN", "ATAN", "ATAN2", "CBRT", "CEIL", "COS", "COSH",
        "E", "EXP", "FLOOR", "LOG", "LOG10", "PI", "POW", "ROUND", "SIGNUM",
        "SIN", "SINH", "SQRT", "TAN", "TANH", "TAU",
        // Conditional functions
        "CASE", "COALESCE", "GREATEST", "LEAST", "NULLIF",
        // IP functions
        "CIDR_MATCH",
        // Multivalue functions
        "MV_AVG", "MV_CONCAT", "MV_COUNT", "MV_DEDUPE", "MV_FIRST", "MV_LAST",
        "MV_MAX", "MV_MEDIAN", "MV_MIN", "MV_SORT", "MV_SLICE", "MV_SUM", "MV_ZIP",
        // Other functions
        "LENGTH", "BUCKET", "IS_FINITE", "IS_INFINITE", "IS_NAN",
    ],
    operators: &["AND", "OR", "NOT", "IN", "LIKE", "RLIKE", "IS", "IS NOT"],
    comparison_operators: EMPTY,
    constants: &["true", "false", "null", "NULL", "TRUE", "FALSE"],
    types: &[
        "boolean", "byte", "short", "integer", "long", "unsigned_long",
        "float", "double", "half_float", "scaled_float",
        "keyword", "text", "date", "date_nanos", "ip", "version",
        "binary", "geo_point", "geo_shape", "point", "shape",
        "null",
    ],
    common_fields: EMPTY,
    time_modifiers: EMPTY,
    set_scopes: EMPTY,
    test_operators: EMPTY,
};

/// fish shell
pub static FISH: TokenTables = TokenTables {
    keywords: &[
        "function", "end", "if", "else", "switch", "case", "for", "in", "while",
        "begin", "break", "continue", "return", "and", "or", "not", "builtin",
        "command", "eval", "exec", "time",
    ],
    builtins: &[
        // Variable and environment
        "set", "set_color", "read", "export", "path",
        // Functions
        "functions", "funced", "funcsave", "source",
        // Completions and abbreviations
        "complete", "abbr",
        // Key bindings and command line
        "bind", "commandline", "fish_key_reader",
        // String and list operations
        "string", "contains", "count", "argparse",
        // Math and random
        "math", "random",
        // Status and type
        "status", "type", "isatty",
        // IO
        "echo", "printf", "test",
        // Job control
        "bg", "fg", "jobs", "disown", "wait",
        // History
        "history",
        // Directory navigation
        "cd", "pushd", "popd", "dirs", "prevd", "nextd", "pwd",
        // Help and documentation
        "help", "apropos", "man",
        // Fish specific
        "fish", "fish_add_path", "fish_config", "fish_indent", "fish_prompt",
        "fish_right_prompt", "fish_mode_prompt", "fish_greeting", "fish_update_completions",
        "fish_clipboard_copy", "fish_clipboard_paste", "fish_git_prompt", "fish_hg_prompt",
        "fish_vcs_prompt", "fish_svn_prompt", "fish_is_root_user", "fish_delta", "fish_title",
        // Process
        "kill", "killall", "pgrep", "pkill", "ps",
        // File operations
        "ls", "cat", "cp", "mv", "rm", "mkdir", "rmdir", "touch", "chmod", "chown",
        // Text processing
        "grep", "sed", "awk", "cut", "sort", "uniq", "head", "tail", "wc", "tr",
        // Other common commands
        "find", "which", "whereis", "file", "realpath", "basename", "dirname", "emit",
    ],
    functions: EMPTY,
    operators: EMPTY,
    comparison_operators: EMPTY,
    constants: EMPTY,
    types: EMPTY,
    common_fields: EMPTY,
    time_modifiers: EMPTY,
    set_scopes: &[
        "-l", "--local", "-g", "--global", "-U", "--universal", "-x", "--export",
        "-u", "--unexport", "-e", "--erase", "-q", "--query", "-n", "--names",
        "-S", "--show", "-L", "--long", "-a", "--append", "-p", "--prepend",
        "--path", "--unpath",
    ],
    test_operators: &[
        "-a", "-b", "-c", "-d", "-e", "-f", "-g", "-h", "-k", "-p", "-r", "-s",
        "-t", "-u", "-w", "-x", "-L", "-O", "-G", "-N", "-S",
        "-eq", "-ne", "-lt", "-le", "-gt", "-ge",
        "-nt", "-ot", "-ef",
        "-z", "-n",
    ],
};

/// Get the token tables for a language
pub fn tables(lang: Language) -> &'static TokenTables {
    match lang {
        Language::Spl => &SPL,
        Language::Esql => &ESQL,
        Language::Fish => &FISH,
    }
}

/// Join literals into a regex alternation, escaping each one
///
/// Alternation order is list order; the regex engine tries earlier entries
/// first, so ties break toward earlier literals.
pub fn alternation(literals: &[&str]) -> String {
    literals
        .iter()
        .map(|lit| regex::escape(lit))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_nonempty() {
        assert!(!SPL.keywords.is_empty());
        assert!(!SPL.functions.is_empty());
        assert!(!ESQL.keywords.is_empty());
        assert!(!ESQL.types.is_empty());
        assert!(!FISH.keywords.is_empty());
        assert!(!FISH.builtins.is_empty());
    }

    #[test]
    fn test_alternation_escapes_metacharacters() {
        let alt = alternation(&["a+b", "c|d"]);
        assert_eq!(alt, r"a\+b|c\|d");
        let re = regex::Regex::new(&format!("^(?:{})$", alt)).unwrap();
        assert!(re.is_match("a+b"));
        assert!(re.is_match("c|d"));
        assert!(!re.is_match("aab"));
    }

    #[test]
    fn test_alternation_prefers_earlier_entries() {
        // "IS" precedes "IS NOT" in the ES|QL operator list, so the
        // alternation stops at "IS" even when "IS NOT" would also match.
        let alt = alternation(ESQL.operators);
        let re = regex::Regex::new(&format!("^(?:{alt})")).unwrap();
        assert_eq!(re.find("IS NOT").map(|m| m.as_str()), Some("IS"));
    }

    #[test]
    fn test_lookup_by_language() {
        use crate::language::Language;
        assert!(tables(Language::Spl).keywords.contains(&"search"));
        assert!(tables(Language::Esql).keywords.contains(&"FROM"));
        assert!(tables(Language::Fish).keywords.contains(&"function"));
    }
}
