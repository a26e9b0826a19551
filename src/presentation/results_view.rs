use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Element, Length};

use crate::core::models::NewsItem;
use crate::presentation::app_theme;
use crate::presentation::result_presenter::{assign_columns, DisplayNewsItem};

/// The two-column card grid for one completed search.
pub struct ResultsView {
    keyword: String,
    left_column: Vec<DisplayNewsItem>,
    right_column: Vec<DisplayNewsItem>,
}

#[derive(Debug, Clone)]
pub enum ResultsViewMessage {
    OpenArticle(String),
}

impl ResultsView {
    pub fn build_from_items(keyword: &str, items: &[NewsItem]) -> Self {
        log::info!(
            "[RESULTS_VIEW] Building view for '{}' with {} articles",
            keyword,
            items.len()
        );

        let (left_column, right_column) = assign_columns(items);
        Self {
            keyword: keyword.to_string(),
            left_column,
            right_column,
        }
    }

    pub fn item_count(&self) -> usize {
        self.left_column.len() + self.right_column.len()
    }

    pub fn render_ui(&self) -> Element<'_, ResultsViewMessage> {
        let heading = text(format!(
            "'{}' 검색 결과 (상위 {}개 기사)",
            self.keyword,
            self.item_count()
        ))
        .size(20);

        let grid = row![
            self.render_column(&self.left_column),
            self.render_column(&self.right_column),
        ]
        .spacing(20)
        .width(Length::Fill);

        let content = column![heading, grid].spacing(16).width(Length::Fill);

        scrollable(content).height(Length::Fill).into()
    }

    fn render_column<'a>(
        &'a self,
        items: &'a [DisplayNewsItem],
    ) -> Element<'a, ResultsViewMessage> {
        Column::with_children(items.iter().map(|item| self.render_card(item)))
            .spacing(14)
            .width(Length::FillPortion(1))
            .into()
    }

    fn render_card<'a>(&'a self, item: &'a DisplayNewsItem) -> Element<'a, ResultsViewMessage> {
        let title = text(&item.title)
            .size(22)
            .style(|_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(app_theme::TITLE_BLUE),
            });

        let published = text(&item.published).size(13).style(
            |_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(app_theme::DATE_GRAY),
            },
        );

        let description = text(&item.description).size(15);

        let link_btn = button(text("기사 보기 →").size(14))
            .padding([8, 16])
            .style(app_theme::primary_button_style)
            .on_press(ResultsViewMessage::OpenArticle(item.link.clone()));

        let card = column![title, published, description, link_btn]
            .spacing(8)
            .width(Length::Fill);

        container(card)
            .padding(16)
            .width(Length::Fill)
            .style(app_theme::news_card_style)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items(count: usize) -> Vec<NewsItem> {
        (1..=count)
            .map(|n| NewsItem {
                title: format!("기사 {}", n),
                description: format!("내용 {}", n),
                link: format!("https://news.example.com/{}", n),
                original_link: String::new(),
                pub_date: "Mon, 17 Jun 2024 09:30:00 +0900".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_build_splits_three_items_two_left_one_right() {
        let view = ResultsView::build_from_items("포스코", &sample_items(3));

        assert_eq!(view.left_column.len(), 2);
        assert_eq!(view.right_column.len(), 1);
        assert_eq!(view.left_column[0].title, "기사 1");
        assert_eq!(view.right_column[0].title, "기사 2");
        assert_eq!(view.left_column[1].title, "기사 3");
    }

    #[test]
    fn test_item_count_matches_input() {
        let view = ResultsView::build_from_items("포스코", &sample_items(20));

        assert_eq!(view.item_count(), 20);
        assert_eq!(view.left_column.len(), 10);
        assert_eq!(view.right_column.len(), 10);
    }

    #[test]
    fn test_build_keeps_keyword_for_heading() {
        let view = ResultsView::build_from_items("반도체", &sample_items(1));

        assert_eq!(view.keyword, "반도체");
    }
}
