//! Interactive menu over the catalog.
//!
//! The console reads one answer per line and writes prompts and results to its
//! output, so the whole session can be scripted. Reaching the end of input
//! behaves like choosing Exit. Store failures are not handled here, they end
//! the session with the error.

pub mod menu;

use std::io::{BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;
use rust_decimal::Decimal;
use crate::books::domain::model::BookUpdate;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::add_publisher_cmd::{AddPublisherCommand, AddPublisherCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest, SearchCriteria};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::console::menu::{header, option_line, MenuOption, SearchOption, MAIN_HEADER, SEARCH_HEADER};
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

const DEFAULT_WIDTH: usize = 80;
const GOODBYE: &str = "Thanks your for using our database services! Bye";

pub fn terminal_width() -> usize {
    crossterm::terminal::size().map(|(cols, _)| cols as usize).unwrap_or(DEFAULT_WIDTH)
}

pub struct Console<R, W> {
    catalog_service: Arc<dyn CatalogService>,
    input: R,
    output: W,
    width: usize,
    eof: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(catalog_service: Arc<dyn CatalogService>, input: R, output: W) -> Self {
        Self {
            catalog_service,
            input,
            output,
            width: DEFAULT_WIDTH,
            eof: false,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn run(&mut self) -> LibraryResult<()> {
        loop {
            self.print_menu()?;
            let answer = self.prompt("Please select a function, type [1 - 6] and press enter: ")?;
            if self.eof {
                self.say(GOODBYE)?;
                return Ok(());
            }
            let option = match answer.trim().parse::<usize>() {
                Ok(number) => MenuOption::from_number(number),
                Err(_) => {
                    self.say("Wrong input. Please enter a number . . .")?;
                    continue;
                }
            };
            match option {
                Some(MenuOption::AddPublisher) => self.add_publisher().await?,
                Some(MenuOption::AddBook) => self.add_book().await?,
                Some(MenuOption::EditBook) => self.edit_book().await?,
                Some(MenuOption::DeleteBook) => self.delete_book().await?,
                Some(MenuOption::SearchBooks) => self.search_books().await?,
                Some(MenuOption::Exit) => {
                    self.say(GOODBYE)?;
                    return Ok(());
                }
                None => self.say("Invalid option. Please enter a number between 1 and 6.")?,
            }
            if self.eof {
                self.say(GOODBYE)?;
                return Ok(());
            }
        }
    }

    async fn add_publisher(&mut self) -> LibraryResult<()> {
        self.say("")?;
        let name = self.prompt("Enter the name of the publisher: ")?;
        let phone = self.prompt("Enter the phone number of the publisher: ")?;
        let city = self.prompt("Enter the city of the publisher: ")?;
        if self.eof {
            return Ok(());
        }

        let req = AddPublisherCommandRequest::new(name.as_str(), phone.as_str(), city.as_str());
        let _ = AddPublisherCommand::new(self.catalog_service.clone()).execute(req).await?;
        self.say(format!("Publisher {} added successfully!", name).as_str())?;
        self.say("")
    }

    async fn add_book(&mut self) -> LibraryResult<()> {
        self.say("")?;
        let isbn = self.prompt("Enter the ISBN of the book: ")?;
        let title = self.prompt("Enter the title of the book: ")?;
        let year = self.prompt("Enter the year of the book: ")?;
        let published_by = self.prompt("Enter the publisher of the book: ")?;
        let previous_edition = self.prompt("Enter the previous edition of the book: ")?;
        let price = self.prompt("Enter the price of the book: ")?;
        if self.eof {
            return Ok(());
        }
        let price = match parse_price(price.as_str()) {
            Some(price) => price,
            None => {
                self.say("Invalid price. Please enter a valid number.")?;
                return self.say("");
            }
        };

        let req = AddBookCommandRequest::new(isbn.as_str(), title.as_str(), year.as_str(),
                                             published_by.as_str(), previous_edition.as_str(), price);
        let _ = AddBookCommand::new(self.catalog_service.clone()).execute(req).await?;
        self.say(format!("Book {} added successfully!", title).as_str())?;
        self.say("")
    }

    async fn edit_book(&mut self) -> LibraryResult<()> {
        self.say("")?;
        let isbn = self.prompt("Enter the ISBN of the book you want to edit: ")?;
        if self.eof {
            return Ok(());
        }
        let existing = match self.find_book(isbn.as_str()).await? {
            Some(book) => book,
            None => return self.say(format!("Book with ISBN {} not found.", isbn).as_str()),
        };
        self.say("Existing Book Information:")?;
        self.print_book(&existing)?;

        let title = self.prompt("Enter the new title (or press Enter to keep the existing title): ")?;
        let year = self.prompt("Enter the new year (or press Enter to keep the existing year): ")?;
        let published_by = self.prompt("Enter the new publisher (or press Enter to keep the existing publisher): ")?;
        let previous_edition = self.prompt("Enter the new previous edition (or press Enter to keep the existing edition): ")?;
        let price = self.prompt("Enter the new price (or press Enter to keep the existing price): ")?;
        if self.eof {
            return Ok(());
        }

        let mut update = BookUpdate {
            title: non_empty(title),
            year: non_empty(year),
            published_by: non_empty(published_by),
            previous_edition: non_empty(previous_edition),
            price: None,
        };
        if let Some(price) = non_empty(price) {
            match parse_price(price.as_str()) {
                Some(price) => update.price = Some(price),
                None => {
                    self.say("Invalid price. Please enter a valid number.")?;
                    return self.say("");
                }
            }
        }

        let req = UpdateBookCommandRequest::new(isbn.as_str(), update);
        let res = UpdateBookCommand::new(self.catalog_service.clone()).execute(req).await?;
        if res.updated {
            self.say(format!("Book with ISBN {} updated successfully!", isbn).as_str())?;
        } else {
            self.say("Failed to update the book.")?;
        }
        self.say("")
    }

    async fn delete_book(&mut self) -> LibraryResult<()> {
        self.say("")?;
        let isbn = self.prompt("Enter the ISBN of the book you want to delete: ")?;
        if self.eof {
            return Ok(());
        }
        let existing = match self.find_book(isbn.as_str()).await? {
            Some(book) => book,
            None => return self.say(format!("Book with ISBN {} not found.", isbn).as_str()),
        };
        self.say("Book Information:")?;
        self.print_book(&existing)?;

        let confirmation = self.prompt("Are you sure you want to delete this book? (y/n): ")?;
        if self.eof {
            return Ok(());
        }
        if confirmation.trim().to_lowercase() != "y" {
            return self.say("Deletion canceled.");
        }

        let req = RemoveBookCommandRequest::new(isbn.as_str());
        let res = RemoveBookCommand::new(self.catalog_service.clone()).execute(req).await?;
        if res.removed {
            self.say(format!("Book with ISBN {} deleted successfully!", isbn).as_str())?;
        } else {
            self.say("Failed to delete the book.")?;
        }
        self.say("")
    }

    async fn search_books(&mut self) -> LibraryResult<()> {
        self.say("")?;
        self.say(header(SEARCH_HEADER, '=', self.width).as_str())?;
        self.say(option_line(&SearchOption::ALL).as_str())?;
        let answer = self.prompt("Please select a function, type [1 - 4] and press enter: ")?;
        if self.eof {
            return Ok(());
        }
        let option = match answer.trim().parse::<usize>() {
            Ok(number) => SearchOption::from_number(number),
            Err(_) => return self.say("Wrong input. Please enter a number . . ."),
        };
        match option {
            Some(SearchOption::AllThenTitle) => {
                self.search_all_books().await?;
                self.search_by_title().await
            }
            Some(SearchOption::Publisher) => self.search_by_publisher().await,
            Some(SearchOption::PriceRange) => self.search_by_price_range().await,
            Some(SearchOption::TitleAndPublisher) => self.search_by_title_and_publisher().await,
            None => self.say("Invalid option. Please enter a number between 1 and 4."),
        }
    }

    async fn search_all_books(&mut self) -> LibraryResult<()> {
        let books = self.search(SearchCriteria::All).await?;
        self.say("The following are the ISBNs and titles of all books.")?;
        self.print_listing(&books)
    }

    async fn search_by_title(&mut self) -> LibraryResult<()> {
        self.say("")?;
        let title = self.prompt("Enter the exact book title:")?;
        if self.eof {
            return Ok(());
        }
        let books = self.search(SearchCriteria::Title(title)).await?;
        if books.is_empty() {
            self.say("The title you wanted does not exist in our database.")?;
        } else {
            self.say("We found the following matching titles for you.")?;
            self.print_listing(&books)?;
        }
        self.say("")
    }

    async fn search_by_publisher(&mut self) -> LibraryResult<()> {
        self.say("")?;
        let publisher = self.prompt("Enter the publisher you want to search for:")?;
        if self.eof {
            return Ok(());
        }
        let books = self.search(SearchCriteria::Publisher(publisher.clone())).await?;
        if books.is_empty() {
            self.say(format!("No books found from publisher {}.", publisher).as_str())?;
        } else {
            self.say(format!("We found the following books from publisher {}:", publisher).as_str())?;
            self.print_listing(&books)?;
        }
        self.say("")
    }

    async fn search_by_price_range(&mut self) -> LibraryResult<()> {
        self.say("")?;
        let min = self.prompt("Enter the minimum price:")?;
        let max = self.prompt("Enter the maximum price:")?;
        if self.eof {
            return Ok(());
        }
        let (min, max) = match (parse_price(min.as_str()), parse_price(max.as_str())) {
            (Some(min), Some(max)) => (min, max),
            _ => {
                self.say("Invalid input. Please enter a valid number.")?;
                return self.say("");
            }
        };
        let books = self.search(SearchCriteria::PriceRange { min, max }).await?;
        if books.is_empty() {
            self.say("No books found in the specified price range.")?;
        } else {
            self.say(format!("We found the following books in the price range ${} to ${}:", min, max).as_str())?;
            self.print_listing(&books)?;
        }
        self.say("")
    }

    async fn search_by_title_and_publisher(&mut self) -> LibraryResult<()> {
        self.say("")?;
        let title = self.prompt("Enter the exact book title:")?;
        let publisher = self.prompt("Enter the publisher:")?;
        if self.eof {
            return Ok(());
        }
        let criteria = SearchCriteria::TitleAndPublisher { title: title.clone(), publisher: publisher.clone() };
        let books = self.search(criteria).await?;
        if books.is_empty() {
            self.say(format!("No books found with title \"{}\" from publisher {}.", title, publisher).as_str())?;
        } else {
            self.say(format!("We found the following books with title \"{}\" from publisher {}:", title, publisher).as_str())?;
            self.print_listing(&books)?;
        }
        self.say("")
    }

    async fn find_book(&self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        let res = GetBookCommand::new(self.catalog_service.clone())
            .execute(GetBookCommandRequest::new(isbn)).await?;
        Ok(res.book)
    }

    async fn search(&self, criteria: SearchCriteria) -> LibraryResult<Vec<BookDto>> {
        let res = SearchBooksCommand::new(self.catalog_service.clone())
            .execute(SearchBooksCommandRequest::new(criteria)).await?;
        Ok(res.books)
    }

    fn print_menu(&mut self) -> LibraryResult<()> {
        self.say("")?;
        self.say(header(MAIN_HEADER, '-', self.width).as_str())?;
        self.say(option_line(&MenuOption::ALL).as_str())
    }

    fn print_book(&mut self, book: &BookDto) -> LibraryResult<()> {
        let mut shown = book.clone();
        shown.price = display_price(shown.price);
        let json = serde_json::to_string_pretty(&shown)?;
        self.say(json.as_str())
    }

    fn print_listing(&mut self, books: &[BookDto]) -> LibraryResult<()> {
        for book in books {
            self.say(format!("{} {}", book.isbn, book.title).as_str())?;
        }
        Ok(())
    }

    fn say(&mut self, line: &str) -> LibraryResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    // an exhausted input answers with an empty line and flags the session as over
    fn prompt(&mut self, message: &str) -> LibraryResult<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.eof || self.input.read_line(&mut line)? == 0 {
            self.eof = true;
            return Ok(String::new());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn parse_price(value: &str) -> Option<Decimal> {
    Decimal::from_str(value.trim()).ok()
}

// stored prices lose trailing zeros, show at least cents
fn display_price(mut price: Decimal) -> Decimal {
    if price.scale() < 2 {
        price.rescale(2);
    }
    price
}
