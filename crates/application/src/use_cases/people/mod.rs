mod get_character;
mod list_characters;

pub use get_character::GetCharacterUseCase;
pub use list_characters::ListCharactersUseCase;
