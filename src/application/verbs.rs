//! Built-in verb declarations

use crate::domain::{ParameterSpec, ParameterValue, VerbSchema};

pub const IN_FILE_REPLACE: &str = "inFileReplace";
pub const REMOVE_LINES: &str = "removeLines";
pub const EXECUTE_BATCH: &str = "executeBatch";
pub const STATISTICAL_TABLE: &str = "statisticalTable";
pub const STATISTICAL_FUNCTIONS: &str = "statisticalFunctions";
pub const SQL_PLOT_TOOLS_HACK: &str = "sqlPlotToolsHack";
pub const TWO_FISH: &str = "twoFish";

const OUT_FILE_HELP: &str = "If set will not overwrite the source file but write the result into the out file. Replaces an existing file with the same name";

fn in_file(help: &'static str) -> ParameterSpec {
    ParameterSpec::text("in").short('i').required().help(help)
}

fn out_file() -> ParameterSpec {
    ParameterSpec::text("out").short('o').help(OUT_FILE_HELP)
}

fn database() -> ParameterSpec {
    ParameterSpec::text("database")
        .short('d')
        .required()
        .help("Path to the database file")
}

fn table() -> ParameterSpec {
    ParameterSpec::text("table")
        .short('t')
        .required()
        .help("Database table to query")
}

/// All verbs shipped with the binary, in listing order.
pub fn builtin_verbs() -> Vec<VerbSchema> {
    vec![
        VerbSchema::new(
            IN_FILE_REPLACE,
            "Replace every occurrence of a string in a file with a new string",
        )
        .param(
            ParameterSpec::text("find")
                .short('f')
                .required()
                .help("The text to replace in the file"),
        )
        .param(
            ParameterSpec::text("replaceWith")
                .short('r')
                .required()
                .help("The text that replaces the text found"),
        )
        .param(
            ParameterSpec::text("parseAsNewline")
                .short('n')
                .help("A unique character sequence that is replaced with a newline in find and replacement text"),
        )
        .param(in_file("The file in which to find and replace text"))
        .param(out_file())
        .example(r#"inFileReplace -f "foo" -r "bar" -i notes.txt"#)
        .example(r#"inFileReplace -f ";" -r "<nl>" -n "<nl>" -i list.txt -o lines.txt"#),
        VerbSchema::new(
            REMOVE_LINES,
            "Remove all lines matching either at least one or all of the specified patterns",
        )
        .param(
            ParameterSpec::list("patterns")
                .short('p')
                .required()
                .help(r"Patterns selecting the lines to delete, separated by '#'. Escape a literal '#' inside a pattern as '\#'"),
        )
        .param(
            ParameterSpec::flag("conjunctive")
                .short('c')
                .help("Only remove lines matching ALL the patterns"),
        )
        .param(in_file("The file in which to remove lines"))
        .param(out_file())
        .example(r#"removeLines -p "^DEBUG#^TRACE" -i app.log"#)
        .example(r#"removeLines -p "foo#bar" -c -i data.txt -o filtered.txt"#),
        VerbSchema::new(
            EXECUTE_BATCH,
            "Execute a number of batch instructions from a json execution manual",
        )
        .param(
            ParameterSpec::text("instructions")
                .short('i')
                .required()
                .help(r#"Json file listing which command to execute where, e.g. [ { "Location": "/opt/tools", "Command": "hello.sh" } ]"#),
        ),
        VerbSchema::new(STATISTICAL_TABLE, "Create table over various dimensions")
            .param(database())
            .param(table())
            .param(
                ParameterSpec::text("out")
                    .short('o')
                    .required()
                    .help("Where to write the resulting table"),
            )
            .param(
                ParameterSpec::text("outputFormat")
                    .short('f')
                    .default_value(ParameterValue::Text("latex".into()))
                    .help("Output format; 'latex' (tabular) is the only one available"),
            )
            .param(
                ParameterSpec::text("value")
                    .short('v')
                    .required()
                    .help("Name of the value column. Can be an expression"),
            )
            .param(
                ParameterSpec::text("main")
                    .short('m')
                    .required()
                    .help("The main trait to group by"),
            )
            .param(ParameterSpec::text("mainFont").help("Special font to use for the main traits"))
            .param(
                ParameterSpec::text("mainGroup")
                    .short('g')
                    .help("Value to group the main values by"),
            )
            .param(
                ParameterSpec::text("mainGroupSep")
                    .help("Separator placed between groups of main values"),
            )
            .param(
                ParameterSpec::list("secondaries")
                    .short('s')
                    .help("The secondary traits to distinguish by. Default is all available"),
            )
            .param(
                ParameterSpec::list("secondaryAliases")
                    .help("Display names for the secondary traits, in the same order"),
            )
            .param(
                ParameterSpec::text("metric")
                    .help("The metric to use on the data: 'average', 'median', 'min' or 'max'"),
            )
            .param(
                ParameterSpec::flag("printAbsoluteValues")
                    .help("Print absolute values next to relative ones"),
            ),
        VerbSchema::new(
            STATISTICAL_FUNCTIONS,
            "Apply statistical functions to a value column, optionally grouped",
        )
        .param(database())
        .param(table())
        .param(
            ParameterSpec::text("out")
                .short('o')
                .required()
                .help("Where to write the results"),
        )
        .param(
            ParameterSpec::text("value")
                .short('v')
                .required()
                .help("Name of the value column. Can be an expression"),
        )
        .param(
            ParameterSpec::list("groups")
                .short('g')
                .help("Columns to group the values by"),
        )
        .param(
            ParameterSpec::list("functions")
                .short('f')
                .help("Functions to apply, e.g. 'average#median#min#max'"),
        ),
        VerbSchema::new(
            SQL_PLOT_TOOLS_HACK,
            "Rewrite a plot source file using data queried from a database table",
        )
        .param(
            ParameterSpec::text("input")
                .short('i')
                .required()
                .help("The plot source file to process"),
        )
        .param(database())
        .param(table()),
        VerbSchema::new(TWO_FISH, "Encrypt or decrypt a file with the Twofish block cipher")
            .param(in_file("The file to encrypt or decrypt"))
            .param(ParameterSpec::text("out").short('o').help("Where to write the result"))
            .param(ParameterSpec::flag("encrypt").help("Encrypt the input file"))
            .param(ParameterSpec::flag("decrypt").help("Decrypt the input file"))
            .param(
                ParameterSpec::text("temp")
                    .short('t')
                    .help("Directory for intermediate files"),
            )
            .param(ParameterSpec::flag("keep").help("Keep intermediate files")),
    ]
}
