use ccform_core::{DisplayFields, FormInputValues};
use ccform_formatter::GroupingMode;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ccform",
    version,
    about = "Format credit card form fields and validate CPF/CNPJ documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format form field values and print them as JSON
    Format(FormatArgs),
    /// Classify a document as CPF, CNPJ or unclassified
    Classify(DocumentArgs),
    /// Check the digits of a CPF or CNPJ; exits 1 when invalid
    Validate(DocumentArgs),
    /// Print the asset path of a card brand or special icon
    Icon(IconArgs),
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Comma-separated fields to emit (number,expiry,cvc,name,postalCode,doc)
    #[arg(
        long,
        env = "CCFORM_FIELDS",
        default_value = "number,expiry,cvc,name,postalCode,doc"
    )]
    pub fields: DisplayFields,

    /// Card number grouping: fixed (runs of four) or brand (brand gaps)
    #[arg(long, env = "CCFORM_GROUPING", default_value_t = GroupingMode::FixedWidth)]
    pub grouping: GroupingMode,

    #[arg(long)]
    pub number: Option<String>,

    #[arg(long)]
    pub expiry: Option<String>,

    #[arg(long)]
    pub cvc: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub postal_code: Option<String>,

    /// CPF or CNPJ
    #[arg(long)]
    pub doc: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl FormatArgs {
    /// Raw field values given on the command line.
    pub fn input_values(&self) -> FormInputValues {
        FormInputValues {
            number: self.number.clone(),
            expiry: self.expiry.clone(),
            cvc: self.cvc.clone(),
            name: self.name.clone(),
            postal_code: self.postal_code.clone(),
            doc: self.doc.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct DocumentArgs {
    /// Document digits, punctuated or not
    pub raw: String,
}

#[derive(Args, Debug)]
pub struct IconArgs {
    /// Brand type (`visa`, `american-express`) or `cvc`, `cvc_amex`, `placeholder`
    pub name: String,
}
