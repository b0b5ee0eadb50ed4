pub mod youdao;

pub use youdao::YoudaoClient;
