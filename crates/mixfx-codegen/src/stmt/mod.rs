pub(crate) mod codegen;
