//! Built-in type handlers.

mod city;
mod keyword;
mod number;
mod repository;
mod wildcard;

pub use city::CityHandler;
pub use keyword::KeywordHandler;
pub use number::NumberHandler;
pub use repository::{RepositoryNameHandler, RepositoryUrlHandler, RepositoryUserHandler};
pub use wildcard::WildcardHandler;

use crate::handler::HandlerRegistry;

pub const KEYWORD: &str = "keyword";
pub const ENTITY: &str = "entity";
pub const CITY: &str = "city";
pub const NUMBER: &str = "number";
pub const REPONAME: &str = "reponame";
pub const REPOUSER: &str = "repouser";
pub const REPOURL: &str = "repourl";
pub const WILDCARD: &str = "wildcard";

pub(crate) fn register_builtins(registry: &mut HandlerRegistry) {
    registry.register(KEYWORD, KeywordHandler::keyword());
    registry.register(ENTITY, KeywordHandler::entity());
    registry.register(CITY, CityHandler);
    registry.register(NUMBER, NumberHandler);
    registry.register(REPONAME, RepositoryNameHandler);
    registry.register(REPOUSER, RepositoryUserHandler);
    registry.register(REPOURL, RepositoryUrlHandler);
    registry.register(WILDCARD, WildcardHandler);
}
