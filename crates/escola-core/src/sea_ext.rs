//! Query extensions applying the shared options semantics.
//!
//! Every repository paginates and sorts through these helpers, so offset,
//! the hard page ceiling, and direction behave identically everywhere.

use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{ColumnTrait, EntityTrait, IntoSimpleExpr, QueryOrder, QuerySelect, Select};

use escola_domain::options::GetOptions;

pub trait SelectOptionsExt: Sized {
    /// Skip `offset` rows and cap the page at the effective limit.
    fn page_with(self, opts: &GetOptions) -> Self;

    /// Order by `column` in the requested direction.
    fn order_with<C: ColumnTrait>(self, column: C, ascending: bool) -> Self;
}

impl<E> SelectOptionsExt for Select<E>
where
    E: EntityTrait,
{
    fn page_with(self, opts: &GetOptions) -> Self {
        self.offset(opts.offset).limit(opts.effective_limit())
    }

    fn order_with<C: ColumnTrait>(self, column: C, ascending: bool) -> Self {
        if ascending {
            self.order_by_asc(column)
        } else {
            self.order_by_desc(column)
        }
    }
}

/// Case-insensitive anchored prefix match:
/// `lower(column) LIKE lower(prefix) || '%'`. Spelled out with `lower` so
/// behavior does not depend on the backend's LIKE collation.
pub fn prefix_expr<C: ColumnTrait>(column: C, prefix: &str) -> SimpleExpr {
    Expr::expr(Func::lower(column.into_simple_expr()))
        .like(format!("{}%", prefix.to_lowercase()))
}
