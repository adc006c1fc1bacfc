use shop_derive::shop_error;

#[shop_error]
#[derive(Debug)]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        source: std::num::ParseIntError,
        context: Option<std::borrow::Cow<'static, str>>,
    },
}

fn main() {}
