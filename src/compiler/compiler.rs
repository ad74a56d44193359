//! Main compiler module.
//!
//! Holds the [`Compiler`] output state and the top level of generation:
//! the banner, the runtime include, prototypes and then every declaration
//! in source order.

use std::fmt::{self, Write};

use tracing::{debug, warn};

use crate::ast::ast::{
    Declaration, FunctionDeclaration, Identifier, Keyword, ParameterList, Program,
};

use super::{
    expr::is_constant,
    stdlib::HEADER_NAME,
    stmt::{gen_block, gen_variable_decl},
};

pub const BANNER: &str = "// Auto-generated output by Minic Compiler";

/// Output state shared by the generation functions.
pub struct Compiler<'a> {
    out: &'a mut dyn Write,
}

impl<'a> Compiler<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Compiler { out }
    }

    pub fn write(&mut self, text: &str) -> fmt::Result {
        self.out.write_str(text)
    }

    pub fn write_line(&mut self, text: &str) -> fmt::Result {
        self.out.write_str(text)?;
        self.out.write_char('\n')
    }

    /// Writes `type name`, spelling `string` as `char *`.
    pub fn gen_declarator(&mut self, type_keyword: &Keyword, name: &Identifier) -> fmt::Result {
        match type_keyword.literal.as_str() {
            "string" => write!(self.out, "char *{}", name.literal),
            other => write!(self.out, "{} {}", other, name.literal),
        }
    }

    pub fn gen_parameter_list(&mut self, parameters: &ParameterList) -> fmt::Result {
        self.write("(")?;
        for (index, parameter) in parameters.iter().enumerate() {
            if index > 0 {
                self.write(",")?;
            }
            self.gen_declarator(&parameter.param_type, &parameter.name)?;
        }
        self.write(")")
    }

    fn gen_function_signature(&mut self, function: &FunctionDeclaration) -> fmt::Result {
        self.gen_declarator(&function.return_type, &function.name)?;
        self.gen_parameter_list(&function.parameters)
    }

    pub fn gen_function_prototype(&mut self, function: &FunctionDeclaration) -> fmt::Result {
        self.gen_function_signature(function)?;
        self.write_line(";")
    }

    pub fn gen_function_implementation(&mut self, function: &FunctionDeclaration) -> fmt::Result {
        self.gen_function_signature(function)?;
        gen_block(self, &function.body)?;
        self.write_line("")
    }
}

/// Writes the C translation of a type checked program to `out`.
///
/// Global initializers are written as they appear in the source. One that
/// reads another global or calls a function is valid minic but not a C
/// constant expression, so it is logged as a warning and C compilers will
/// reject the output.
pub fn generate(program: &Program, out: &mut impl Write) -> fmt::Result {
    let mut compiler = Compiler::new(out);

    compiler.write_line(BANNER)?;
    compiler.write_line(&format!("#include \"{}\"", HEADER_NAME))?;

    let functions = program
        .declarations
        .iter()
        .filter_map(|declaration| match declaration {
            Declaration::Function(function) => Some(function),
            Declaration::Variable(_) => None,
        });
    for function in functions {
        compiler.gen_function_prototype(function)?;
    }

    for declaration in &program.declarations {
        match declaration {
            Declaration::Function(function) => compiler.gen_function_implementation(function)?,
            Declaration::Variable(variable) => {
                if let Some(initializer) = &variable.initializer {
                    if !is_constant(initializer) {
                        warn!(
                            variable = %variable.name.literal,
                            "global initializer is not a constant expression in C"
                        );
                    }
                }
                gen_variable_decl(&mut compiler, variable)?;
                compiler.write_line(";")?;
            }
        }
    }

    debug!(declarations = program.declarations.len(), "generated C output");
    Ok(())
}

/// Convenience wrapper around [`generate`] collecting the output.
pub fn generate_to_string(program: &Program) -> Result<String, fmt::Error> {
    let mut output = String::new();
    generate(program, &mut output)?;
    Ok(output)
}
