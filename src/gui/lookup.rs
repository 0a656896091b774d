use iced::{
    alignment::{Horizontal, Vertical},
    widget::{text::Shaping, Button, Column, Container, Row, Scrollable, Text, TextInput},
    Alignment, Element, Length, Task,
};
use iced_aw::TabLabel;

use crate::database::favorites::{self, FavoriteEntry};
use crate::database::dictionary;
use crate::dictionary::entry::LexicalRecord;
use crate::render::{self, Document};

use super::Tab;

#[derive(Debug, Clone)]
pub enum Message {
    LanguageChanged(String),
    WordChanged(String),
    DictionaryTimer { version: usize },
    ReadRecord { language: String, word: String },
    RecordRead { record: Option<LexicalRecord> },
    AddFavorite,
    RemoveFavorite,
    FavoriteChecked { favorite: bool },
    FavoriteStored,
    FavoriteRemoved,
    Error(String),
}

pub struct LookupTab {
    language: String,
    word: String,
    version: usize,
    document: Option<Document>,
    not_found: bool,
    favorite: bool,
}

impl LookupTab {
    pub fn new() -> LookupTab {
        LookupTab {
            language: String::from("en"),
            word: String::new(),
            version: 0,
            document: None,
            not_found: false,
            favorite: false,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LanguageChanged(value) => {
                self.language = value;
                self.bump_version()
            }
            Message::WordChanged(value) => {
                self.word = value;
                self.bump_version()
            }
            Message::DictionaryTimer { version } => {
                if version == self.version && !self.word.is_empty() {
                    Task::done(Message::ReadRecord {
                        language: self.language.clone(),
                        word: self.word.clone(),
                    })
                } else {
                    Task::none()
                }
            }
            Message::ReadRecord { language, word } => Task::perform(
                dictionary::read_record(language, word),
                |record| match record {
                    Ok(record) => Message::RecordRead { record },
                    Err(e) => Message::Error(e.to_string()),
                },
            ),
            Message::RecordRead { record } => match record {
                Some(record) => {
                    self.document = Some(render::render_record(&record));
                    self.not_found = false;

                    Task::perform(
                        favorites::is_favorite(self.language.clone(), self.word.clone()),
                        |favorite| match favorite {
                            Ok(favorite) => Message::FavoriteChecked { favorite },
                            Err(e) => Message::Error(e.to_string()),
                        },
                    )
                }
                None => {
                    self.document = None;
                    self.not_found = true;
                    self.favorite = false;
                    Task::none()
                }
            },
            Message::AddFavorite => match &self.document {
                Some(document) => Task::perform(
                    favorites::insert_favorite(FavoriteEntry {
                        language: self.language.clone(),
                        word: self.word.clone(),
                        markdown: document.markdown.clone(),
                        source_url: document.source_url.clone(),
                    }),
                    |res| match res {
                        Ok(()) => Message::FavoriteStored,
                        Err(e) => Message::Error(e.to_string()),
                    },
                ),
                None => Task::none(),
            },
            Message::RemoveFavorite => Task::perform(
                favorites::remove_favorite(self.language.clone(), self.word.clone()),
                |res| match res {
                    Ok(()) => Message::FavoriteRemoved,
                    Err(e) => Message::Error(e.to_string()),
                },
            ),
            Message::FavoriteChecked { favorite } => {
                self.favorite = favorite;
                Task::none()
            }
            Message::FavoriteStored => {
                self.favorite = true;
                Task::none()
            }
            Message::FavoriteRemoved => {
                self.favorite = false;
                Task::none()
            }
            Message::Error(message) => {
                println!("{message}");
                Task::none()
            }
        }
    }

    fn bump_version(&mut self) -> Task<Message> {
        self.version += 1;
        let version = self.version;

        Task::perform(
            async move {
                tokio::time::sleep(tokio::time::Duration::from_millis(75)).await;
                version
            },
            |version| Message::DictionaryTimer { version },
        )
    }
}

impl Tab for LookupTab {
    type Message = super::Message;

    fn title(&self) -> String {
        String::from("Lookup")
    }

    fn tab_label(&self) -> TabLabel {
        TabLabel::Text(self.title())
    }

    fn content(&self) -> iced::Element<'_, Self::Message> {
        let input_row = Row::new()
            .align_y(Alignment::Center)
            .spacing(16)
            .push(
                TextInput::new("Language", &self.language)
                    .on_input(Message::LanguageChanged)
                    .padding(10)
                    .size(32)
                    .width(Length::Fixed(140.0)),
            )
            .push(
                TextInput::new("Word", &self.word)
                    .on_input(Message::WordChanged)
                    .padding(10)
                    .size(32),
            );

        let mut column = Column::new()
            .align_x(Alignment::Center)
            .max_width(900)
            .padding(20)
            .spacing(16)
            .push(input_row);

        if self.not_found {
            column = column.push(Text::new("No entry found."));
        }

        if let Some(document) = &self.document {
            let favorite_button = if self.favorite {
                Button::new(Text::new("Remove from favorites")).on_press(Message::RemoveFavorite)
            } else {
                Button::new(Text::new("Add to favorites")).on_press(Message::AddFavorite)
            };

            column = column.push(favorite_button).push(
                Scrollable::new(
                    Text::new(document.markdown.as_str()).shaping(Shaping::Advanced),
                )
                .width(Length::Fill)
                .height(Length::Fill),
            );
        }

        let content: Element<'_, Message> = Container::new(column)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into();

        content.map(super::Message::Lookup)
    }
}
