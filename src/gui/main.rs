use std::path::PathBuf;

use iced::{
    alignment::{Horizontal, Vertical},
    widget::{text::Shaping, Button, Column, Container, Row, Text},
    Alignment, Element, Task,
};
use iced_aw::TabLabel;
use rfd::AsyncFileDialog;

use crate::database;

use super::Tab;

pub struct DataTab {
    wiktionary_path: Option<PathBuf>,
    dictionary: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Error(String),
    SetWiktionaryFile,
    WiktionaryFileSet { path: Option<PathBuf> },
    CreateDictionary(PathBuf),
    DictionaryCreated,
}

impl DataTab {
    pub fn new() -> DataTab {
        DataTab {
            wiktionary_path: None,
            dictionary: false,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Error(e) => {
                println!("{e}");
                Task::none()
            }
            Message::SetWiktionaryFile => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Wiktionary")
                    .add_filter("JSON Lines", &["jsonl", "json"])
                    .pick_file(),
                |file_handle| Message::WiktionaryFileSet {
                    path: file_handle.map(|file_handle| file_handle.into()),
                },
            ),
            Message::WiktionaryFileSet { path } => {
                if path.is_some() {
                    self.wiktionary_path = path;
                }
                Task::none()
            }
            Message::CreateDictionary(path) => {
                Task::perform(database::create_dictionary(path), |res| match res {
                    Err(e) => Message::Error(e.to_string()),
                    Ok(()) => Message::DictionaryCreated,
                })
            }
            Message::DictionaryCreated => {
                self.dictionary = true;
                Task::none()
            }
        }
    }
}

impl Tab for DataTab {
    type Message = super::Message;

    fn title(&self) -> String {
        String::from("Data")
    }

    fn tab_label(&self) -> TabLabel {
        TabLabel::Text(self.title())
    }

    fn content(&self) -> iced::Element<'_, Self::Message> {
        let dictionary_msg: Option<Message> =
            self.wiktionary_path.clone().map(Message::CreateDictionary);

        let dictionary = {
            if self.dictionary {
                Some(Text::new("✓").shaping(Shaping::Advanced))
            } else {
                None
            }
        };

        let file_row = Row::new()
            .align_y(Alignment::Center)
            .padding(20)
            .spacing(16)
            .push(
                Button::new(Text::new("Load dictionary file")).on_press(Message::SetWiktionaryFile),
            );

        let create_row = Row::new()
            .align_y(Alignment::Center)
            .padding(20)
            .spacing(16)
            .push(Button::new(Text::new("Create dictionary")).on_press_maybe(dictionary_msg))
            .push_maybe(dictionary);

        let content: Element<'_, Message> = Container::new(
            Column::new()
                .align_x(Alignment::Center)
                .padding(20)
                .spacing(16)
                .push(file_row)
                .push(create_row),
        )
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into();

        content.map(super::Message::Data)
    }
}
