use favorites::{FavoritesTab, Message as FavoritesMessage};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container},
    Element, Length, Task,
};
use iced_aw::{TabLabel, Tabs};
use lookup::{LookupTab, Message as LookupMessage};
use main::{DataTab, Message as DataMessage};

mod favorites;
mod lookup;
mod main;

const TAB_PADDING: u16 = 16;

pub fn run() -> iced::Result {
    iced::application(App::title, App::update, App::view).run()
}

struct App {
    active_tab: TabId,
    lookup_tab: LookupTab,
    favorites_tab: FavoritesTab,
    data_tab: DataTab,
}

#[derive(Clone, Debug)]
enum Message {
    TabSelected(TabId),
    Lookup(LookupMessage),
    Favorites(FavoritesMessage),
    Data(DataMessage),
}

#[derive(Clone, PartialEq, Eq, Debug)]
enum TabId {
    Lookup,
    Favorites,
    Data,
}

impl App {
    fn title(&self) -> String {
        String::from("Wortbuch")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(selected) => {
                self.active_tab = selected.clone();

                if selected == TabId::Favorites {
                    Task::done(Message::Favorites(FavoritesMessage::Refresh))
                } else {
                    Task::none()
                }
            }
            Message::Lookup(message) => self.lookup_tab.update(message).map(Message::Lookup),
            Message::Favorites(message) => {
                self.favorites_tab.update(message).map(Message::Favorites)
            }
            Message::Data(message) => self.data_tab.update(message).map(Message::Data),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        Tabs::new(Message::TabSelected)
            .push(
                TabId::Lookup,
                self.lookup_tab.tab_label(),
                self.lookup_tab.view(),
            )
            .push(
                TabId::Favorites,
                self.favorites_tab.tab_label(),
                self.favorites_tab.view(),
            )
            .push(
                TabId::Data,
                self.data_tab.tab_label(),
                self.data_tab.view(),
            )
            .set_active_tab(&self.active_tab)
            .into()
    }
}

trait Tab {
    type Message;

    fn title(&self) -> String;

    fn tab_label(&self) -> TabLabel;

    fn view(&self) -> Element<'_, Self::Message> {
        let column = Column::new()
            .spacing(20)
            .push(self.content())
            .align_x(iced::Alignment::Center);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .padding(TAB_PADDING)
            .into()
    }

    fn content(&self) -> Element<'_, Self::Message>;
}

impl Default for App {
    fn default() -> Self {
        Self {
            active_tab: TabId::Lookup,
            lookup_tab: LookupTab::new(),
            favorites_tab: FavoritesTab::new(),
            data_tab: DataTab::new(),
        }
    }
}
