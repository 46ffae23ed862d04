mod account_type;
mod account_type_hint;
mod flow_outcome;
mod profile;
