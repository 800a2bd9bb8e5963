use crate::format::{CurrencyFormat, Placement};
use crate::formatter::CurrencyFormatter;
use crate::options::{
    CurrencyOptions, DECIMALS_KEY, DEFAULT_DECIMALS, DEFAULT_MAX_LENGTH, FORMAT_KEY,
    MAX_LENGTH_KEY, PLACEMENT_KEY, SIGN_KEY,
};
use crate::config::{CurrencyConfig, DEFAULT_CURRENCY};
use fieldcraft_model::text::humanize;
use fieldcraft_model::value::to_text;
use fieldcraft_model::{
    ColumnSchema, FieldResult, FieldTypeDescriptor, FieldTypeHandler, InputView, OptionBag,
    OptionDefinition,
};
use serde_json::Value;

/// The `currency` field type.
#[derive(Debug, Clone, Default)]
pub struct CurrencyField {
    formatter: CurrencyFormatter,
}

impl CurrencyField {
    pub fn new(config: CurrencyConfig) -> Self {
        Self {
            formatter: CurrencyFormatter::new(config),
        }
    }

    pub fn formatter(&self) -> &CurrencyFormatter {
        &self.formatter
    }

    /// Options with the validation label defaulting to the humanized name.
    fn resolve(&self, name: &str, bag: &OptionBag) -> CurrencyOptions {
        let mut opts = CurrencyOptions::from_bag(bag);
        if opts.label.is_none() {
            opts.label = Some(humanize(name, &['_']));
        }
        opts
    }
}

impl FieldTypeHandler for CurrencyField {
    fn descriptor(&self) -> FieldTypeDescriptor {
        FieldTypeDescriptor {
            group: "Number".into(),
            type_id: "currency".into(),
            label: "Currency".into(),
        }
    }

    fn options(&self) -> Vec<OptionDefinition> {
        let currencies = self
            .formatter
            .config()
            .currencies
            .iter()
            .map(|(code, def)| (code.clone(), def.label_for(code)));

        vec![
            OptionDefinition::pick(SIGN_KEY, "Currency Sign", DEFAULT_CURRENCY, currencies),
            OptionDefinition::pick(
                PLACEMENT_KEY,
                "Currency Placement",
                Placement::default().as_str(),
                Placement::ALL.map(|p| (p.as_str(), p.describe())),
            ),
            OptionDefinition::pick(
                FORMAT_KEY,
                "Format",
                CurrencyFormat::default().as_str(),
                CurrencyFormat::ALL.map(|f| (f.as_str(), f.sample())),
            ),
            OptionDefinition::integer(DECIMALS_KEY, "Decimals", i64::from(DEFAULT_DECIMALS)),
            OptionDefinition::integer(
                MAX_LENGTH_KEY,
                "Maximum Length",
                i64::from(DEFAULT_MAX_LENGTH),
            ),
        ]
    }

    fn schema(&self, options: &OptionBag) -> ColumnSchema {
        self.formatter
            .storage_schema(&CurrencyOptions::from_bag(options))
    }

    fn prepare(&self, options: &OptionBag) -> String {
        self.formatter.prepare(&CurrencyOptions::from_bag(options))
    }

    fn validate(&self, value: &Value, name: &str, options: &OptionBag) -> FieldResult<()> {
        self.formatter
            .normalize(&to_text(value), &self.resolve(name, options))
            .map(|_| ())
    }

    fn pre_save(&self, value: &Value, name: &str, options: &OptionBag) -> FieldResult<Value> {
        let canonical = self
            .formatter
            .normalize(&to_text(value), &self.resolve(name, options))?;
        Ok(Value::String(canonical))
    }

    fn format(&self, value: &Value, options: &OptionBag) -> String {
        self.formatter
            .format(self.formatter.coerce(value), &CurrencyOptions::from_bag(options))
    }

    fn display(&self, value: &Value, options: &OptionBag) -> String {
        self.formatter
            .display(self.formatter.coerce(value), &CurrencyOptions::from_bag(options))
    }

    fn regex(&self, options: &OptionBag) -> Option<String> {
        Some(
            self.formatter
                .validation_pattern(&CurrencyOptions::from_bag(options)),
        )
    }

    /// The edit control shows the stored amount in the field's own format,
    /// which `pre_save` parses back to the same canonical value.
    fn input(&self, name: &str, value: &Value, options: &OptionBag) -> InputView {
        let opts = self.resolve(name, options);
        let text = to_text(value);
        let shown = if text.is_empty() {
            text
        } else {
            self.formatter.format(self.formatter.coerce(value), &opts)
        };
        InputView {
            name: name.into(),
            field_type: self.descriptor().type_id,
            value: shown,
            pattern: Some(self.formatter.validation_pattern(&opts)),
            max_length: Some(opts.max_length),
        }
    }
}
