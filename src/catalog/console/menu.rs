use std::fmt;
use std::fmt::{Display, Formatter};

pub const MAIN_HEADER: &str = "Book Manager Software";
pub const SEARCH_HEADER: &str = "Search Books";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuOption {
    AddPublisher,
    AddBook,
    EditBook,
    DeleteBook,
    SearchBooks,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 6] = [
        MenuOption::AddPublisher,
        MenuOption::AddBook,
        MenuOption::EditBook,
        MenuOption::DeleteBook,
        MenuOption::SearchBooks,
        MenuOption::Exit,
    ];

    pub fn from_number(number: usize) -> Option<MenuOption> {
        number.checked_sub(1).and_then(|ndx| MenuOption::ALL.get(ndx).copied())
    }
}

impl Display for MenuOption {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MenuOption::AddPublisher => write!(f, "Add a Publisher"),
            MenuOption::AddBook => write!(f, "Add a Book"),
            MenuOption::EditBook => write!(f, "Edit a Book"),
            MenuOption::DeleteBook => write!(f, "Delete a Book"),
            MenuOption::SearchBooks => write!(f, "Search Books"),
            MenuOption::Exit => write!(f, "Exit"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SearchOption {
    // lists every book, then asks for an exact title
    AllThenTitle,
    Publisher,
    PriceRange,
    TitleAndPublisher,
}

impl SearchOption {
    pub const ALL: [SearchOption; 4] = [
        SearchOption::AllThenTitle,
        SearchOption::Publisher,
        SearchOption::PriceRange,
        SearchOption::TitleAndPublisher,
    ];

    pub fn from_number(number: usize) -> Option<SearchOption> {
        number.checked_sub(1).and_then(|ndx| SearchOption::ALL.get(ndx).copied())
    }
}

impl Display for SearchOption {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SearchOption::AllThenTitle => write!(f, "All books. Based on title"),
            SearchOption::Publisher => write!(f, "Based on publisher"),
            SearchOption::PriceRange => write!(f, "Based on price range (min and max)"),
            SearchOption::TitleAndPublisher => write!(f, "Based on title and publisher"),
        }
    }
}

// Centers the text between runs of `fill` sized to the console width.
pub fn header(text: &str, fill: char, width: usize) -> String {
    let side = fill.to_string().repeat(width.saturating_sub(text.chars().count()) / 2);
    format!("{}{}{}", side, text, side)
}

// "1.Add a Publisher  2.Add a Book  ..." on one line
pub fn option_line<T: Display>(options: &[T]) -> String {
    options.iter().enumerate()
        .map(|(ndx, option)| format!("{}.{}  ", ndx + 1, option))
        .collect()
}
