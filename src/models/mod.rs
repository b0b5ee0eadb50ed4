pub mod chat;
pub mod youdao;
