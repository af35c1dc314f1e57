use crate::output::{ListResult, ListedOperation};
use crate::program::Program;

/// List operation - describe every operation in program order
pub fn list_operation(program: &Program) -> ListResult {
    let operations = program
        .operations()
        .iter()
        .enumerate()
        .map(|(i, op)| ListedOperation {
            index: i + 1,
            kind: op.kind().to_string(),
            description: op.to_string(),
        })
        .collect();

    ListResult { operations }
}
