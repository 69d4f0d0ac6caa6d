//! Declaration emission.
//!
//! The emitter is the last pure stage of the pipeline: it validates the
//! duplicate-declaration invariant, maps every shape, groups the results
//! into namespace blocks per the grouping policy, and renders the blocks in
//! input order. It never sorts, merges non-adjacent namespaces, or emits a
//! partial artifact.

use std::collections::HashSet;

use rowshape_ir::{EmitOptions, GroupingPolicy, NamespacePath, RowShape};

use crate::builder::CodeBuilder;
use crate::declaration::{Declaration, NamespaceBlock};
use crate::error::{Error, Result};
use crate::mapper::TypeMapper;

/// Renders row shapes into namespace-wrapped declaration blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter {
    options: EmitOptions,
}

impl Emitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    /// Render the complete declaration file.
    ///
    /// Blocks are separated by one blank line; an empty input renders as an
    /// empty string.
    pub fn emit(&self, shapes: &[RowShape]) -> Result<String> {
        let blocks = self.group(shapes)?;
        let mut builder = CodeBuilder::declarations();
        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            builder.emit(block);
        }
        Ok(builder.build())
    }

    /// Render each namespace block separately, in input order.
    pub fn emit_blocks(&self, shapes: &[RowShape]) -> Result<Vec<String>> {
        let blocks = self.group(shapes)?;
        Ok(blocks.iter().map(NamespaceBlock::build).collect())
    }

    /// Group shapes into namespace blocks without rendering.
    pub fn group(&self, shapes: &[RowShape]) -> Result<Vec<NamespaceBlock>> {
        self.check_duplicates(shapes)?;
        let mut blocks: Vec<NamespaceBlock> = Vec::new();
        for shape in shapes {
            let declaration = Declaration::new(&shape.name)
                .fields(TypeMapper.map_shape(shape)?)
                .nullability(self.options.nullability);
            match blocks.last_mut() {
                Some(last)
                    if self.options.grouping == GroupingPolicy::AdjacentRuns
                        && last.namespace() == &shape.namespace =>
                {
                    last.push(declaration);
                }
                _ => blocks.push(NamespaceBlock::new(shape.namespace.clone()).declaration(declaration)),
            }
        }
        Ok(blocks)
    }

    fn check_duplicates(&self, shapes: &[RowShape]) -> Result<()> {
        let mut seen: HashSet<(&NamespacePath, &str)> = HashSet::new();
        for shape in shapes {
            if !seen.insert((&shape.namespace, shape.name.as_str())) {
                return Err(Error::DuplicateDeclaration {
                    namespace: shape.namespace.to_string(),
                    declaration: shape.name.clone(),
                });
            }
        }
        Ok(())
    }
}
