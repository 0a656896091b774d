use iced::{
    alignment::{Horizontal, Vertical},
    widget::{text::Shaping, Button, Column, Container, Row, Scrollable, Text},
    Element, Length, Task,
};
use iced_aw::TabLabel;

use crate::database::favorites::{self, FavoriteEntry};

use super::Tab;

#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
    Loaded { favorites: Vec<FavoriteEntry> },
    Select(usize),
    Remove(usize),
    Removed,
    Error(String),
}

pub struct FavoritesTab {
    favorites: Vec<FavoriteEntry>,
    selected: Option<usize>,
}

impl FavoritesTab {
    pub fn new() -> FavoritesTab {
        FavoritesTab {
            favorites: Vec::new(),
            selected: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Refresh => Task::perform(favorites::get_favorites(), |favorites| {
                match favorites {
                    Ok(favorites) => Message::Loaded { favorites },
                    Err(e) => Message::Error(e.to_string()),
                }
            }),
            Message::Loaded { favorites } => {
                self.favorites = favorites;
                self.selected = None;
                Task::none()
            }
            Message::Select(index) => {
                self.selected = Some(index);
                Task::none()
            }
            Message::Remove(index) => match self.favorites.get(index) {
                Some(favorite) => Task::perform(
                    favorites::remove_favorite(favorite.language.clone(), favorite.word.clone()),
                    |res| match res {
                        Ok(()) => Message::Removed,
                        Err(e) => Message::Error(e.to_string()),
                    },
                ),
                None => Task::none(),
            },
            Message::Removed => Task::done(Message::Refresh),
            Message::Error(message) => {
                println!("{message}");
                Task::none()
            }
        }
    }
}

impl Tab for FavoritesTab {
    type Message = super::Message;

    fn title(&self) -> String {
        String::from("Favorites")
    }

    fn tab_label(&self) -> TabLabel {
        TabLabel::Text(self.title())
    }

    fn content(&self) -> iced::Element<'_, Self::Message> {
        let mut list = Column::new().spacing(8);

        for (index, favorite) in self.favorites.iter().enumerate() {
            list = list.push(
                Button::new(
                    Text::new(format!("{} ({})", favorite.word, favorite.language))
                        .shaping(Shaping::Advanced),
                )
                .width(Length::Fill)
                .on_press(Message::Select(index)),
            );
        }

        let mut detail = Column::new().spacing(16);

        if let Some(index) = self.selected {
            if let Some(favorite) = self.favorites.get(index) {
                detail = detail
                    .push(Button::new(Text::new("Remove")).on_press(Message::Remove(index)))
                    .push(
                        Scrollable::new(
                            Text::new(favorite.markdown.as_str()).shaping(Shaping::Advanced),
                        )
                        .width(Length::Fill)
                        .height(Length::Fill),
                    );
            }
        }

        let row = Row::new()
            .padding(20)
            .spacing(16)
            .push(
                Scrollable::new(list)
                    .width(Length::Fixed(240.0))
                    .height(Length::Fill),
            )
            .push(detail);

        let content: Element<'_, Message> = Container::new(row)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into();

        content.map(super::Message::Favorites)
    }
}
