use crate::domain::{Book, CatalogEntry, Movie};
use crate::ports::{CatalogSource, SeedData};

use super::dispatch::{Access, Command, CommandDispatcher, Reply};
use super::errors::{CatalogError, SetupError};
use super::registry::ItemRegistry;
use super::session::{AuthSession, SecurityStatus};

/// 図書館 - コマンドの実行コンテキスト
///
/// 可変な状態（台帳の貸出状態とセッション）はすべてここに集約され、
/// コマンド処理のスレッドからのみ触られる。
#[derive(Debug)]
pub struct Library {
    pub books: ItemRegistry<Book>,
    pub movies: ItemRegistry<Movie>,
    pub session: AuthSession,
}

impl Library {
    pub fn new(
        books: ItemRegistry<Book>,
        movies: ItemRegistry<Movie>,
        session: AuthSession,
    ) -> Self {
        Self {
            books,
            movies,
            session,
        }
    }
}

impl TryFrom<SeedData> for Library {
    type Error = SetupError;

    fn try_from(seed: SeedData) -> std::result::Result<Self, Self::Error> {
        let books = seed
            .books
            .iter()
            .map(|b| Book::new(&b.title, &b.author, &b.year))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let movies = seed
            .movies
            .iter()
            .map(|m| Movie::new(&m.title, &m.year, &m.director, m.rating))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        for customer in &seed.customers {
            customer.validate()?;
        }

        Ok(Self::new(
            ItemRegistry::new(books)?,
            ItemRegistry::new(movies)?,
            AuthSession::new(seed.customers)?,
        ))
    }
}

/// 初期データの供給元から図書館を構築する
pub fn load_library(source: &dyn CatalogSource) -> std::result::Result<Library, SetupError> {
    let seed = source.load().map_err(SetupError::Source)?;
    Library::try_from(seed)
}

impl SecurityStatus for Library {
    fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }
}

/// 台帳を取り出す関数（コマンドが対象の台帳を束縛するのに使う）
pub type RegistrySelector<T> = fn(&mut Library) -> &mut ItemRegistry<T>;

/// 標準のコマンド一覧を登録順に作る
///
/// `Login`、本の一覧・貸出・返却、映画の一覧・貸出・返却、`My Details`、`Logout`、`Quit`。
pub fn standard_commands() -> Vec<Command<Library>> {
    let mut commands = vec![login_command()];
    commands.extend(item_commands::<Book>(|library| &mut library.books));
    commands.extend(item_commands::<Movie>(|library| &mut library.movies));
    commands.push(
        Command::new("My Details", |library: &mut Library, _| {
            let customer = library.session.current_principal()?;
            Ok(Reply::Details(customer.details()))
        })
        .requires(Access::LoggedIn),
    );
    commands.push(
        Command::new("Logout", |library: &mut Library, _| {
            library.session.logout()?;
            Ok(Reply::LoggedOut)
        })
        .requires(Access::LoggedIn),
    );
    commands.push(Command::new("Quit", |_: &mut Library, _| Ok(Reply::Quit)));
    commands
}

/// 標準のコマンド一覧を持つディスパッチャ
pub fn standard_dispatcher() -> CommandDispatcher<Library> {
    CommandDispatcher::new(standard_commands())
}

/// `Login: <Library Number> <Password>`
///
/// 引数は半角スペース区切りでちょうど2語でなければならない。
fn login_command() -> Command<Library> {
    Command::new("Login", |library: &mut Library, argument| {
        let argument = argument.unwrap_or_default();
        let credentials: Vec<&str> = argument.split(' ').collect();
        let &[library_number, password] = credentials.as_slice() else {
            return Err(CatalogError::UnknownCommand(format!("Login: {argument}")));
        };
        library.session.login(library_number, password)?;
        Ok(Reply::LoggedIn)
    })
    .with_arg_hint("<Library Number> <Password>")
    .requires(Access::LoggedOut)
}

/// 1種類の台帳に対する一覧・貸出・返却のコマンド
pub fn item_commands<T: CatalogEntry + 'static>(
    select: RegistrySelector<T>,
) -> Vec<Command<Library>> {
    let list = Command::new(format!("List {}s", T::KIND), move |library: &mut Library, _| {
        let rows = select(library).list().iter().map(|item| item.row()).collect();
        Ok(Reply::Items {
            headers: T::HEADERS,
            rows,
        })
    });

    let checkout = Command::new(
        format!("Checkout {}", T::KIND),
        move |library: &mut Library, title| {
            let borrower = library.session.current_principal()?.clone();
            let title = title.ok_or(CatalogError::NotFound { kind: T::KIND })?;
            select(library).checkout_by_title(title, borrower)?;
            Ok(Reply::CheckedOut { kind: T::KIND })
        },
    )
    .with_arg_hint("<Title>")
    .requires(Access::LoggedIn);

    let give_back = Command::new(
        format!("Return {}", T::KIND),
        move |library: &mut Library, title| {
            let title = title.ok_or(CatalogError::NotFound { kind: T::KIND })?;
            select(library).return_by_title(title)?;
            Ok(Reply::Returned { kind: T::KIND })
        },
    )
    .with_arg_hint("<Title>")
    .requires(Access::LoggedIn);

    vec![list, checkout, give_back]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CheckoutableItem, Customer, LibraryNumber};
    use rstest::{fixture, rstest};

    #[fixture]
    fn library() -> Library {
        let books = ItemRegistry::new([
            Book::new("Great Expectations", "Charles Dickens", "1860").unwrap(),
            Book::new("The Pickwick Papers", "Charles Dickens", "1837").unwrap(),
            Book::new("Bleak House", "Charles Dickens", "1853").unwrap(),
        ])
        .unwrap();
        let movies = ItemRegistry::new([
            Movie::rated("Pulp Fiction", "1994", "Quentin Tarantino", 9).unwrap(),
            Movie::unrated("Kill Bill", "2003", "Quentin Tarantino").unwrap(),
        ])
        .unwrap();
        let customer = Customer::new(
            "Charles",
            "Dickens",
            "charles@example.com",
            "Password1",
            LibraryNumber::new("123-4567").unwrap(),
        )
        .unwrap();
        Library::new(books, movies, AuthSession::new([customer]).unwrap())
    }

    fn book_rows(reply: Reply) -> Vec<String> {
        match reply {
            Reply::Items { rows, .. } => rows,
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_try_from_seed_rejects_empty_movies() {
        let seed = SeedData {
            books: vec![crate::ports::BookSeed {
                title: "Bleak House".to_string(),
                author: "Charles Dickens".to_string(),
                year: "1853".to_string(),
            }],
            ..Default::default()
        };
        assert!(matches!(
            Library::try_from(seed),
            Err(SetupError::Registry(crate::application::RegistryError::Empty { kind: "Movie" }))
        ));
    }

    fn book_seed(title: &str) -> crate::ports::BookSeed {
        crate::ports::BookSeed {
            title: title.to_string(),
            author: "Charles Dickens".to_string(),
            year: "1853".to_string(),
        }
    }

    fn movie_seed(title: &str) -> crate::ports::MovieSeed {
        crate::ports::MovieSeed {
            title: title.to_string(),
            year: "1994".to_string(),
            director: "Quentin Tarantino".to_string(),
            rating: None,
        }
    }

    fn customer_with_number(first_name: &str, library_number: &str) -> Customer {
        Customer::new(
            first_name,
            "Dickens",
            "charles@example.com",
            "Password1",
            LibraryNumber::new(library_number).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_try_from_seed_rejects_duplicate_library_number() {
        let seed = SeedData {
            books: vec![book_seed("Bleak House")],
            movies: vec![movie_seed("Pulp Fiction")],
            customers: vec![
                customer_with_number("Charles", "123-4567"),
                customer_with_number("Catherine", "123-4567"),
            ],
        };
        assert!(matches!(
            Library::try_from(seed),
            Err(SetupError::Registry(
                crate::application::RegistryError::DuplicateLibraryNumber { .. }
            ))
        ));
    }

    // 前後の空白だけが異なるタイトルは同じタイトルとみなす
    #[test]
    fn test_try_from_seed_rejects_titles_differing_only_in_whitespace() {
        let seed = SeedData {
            books: vec![book_seed("Bleak House "), book_seed("Bleak House")],
            movies: vec![movie_seed("Pulp Fiction")],
            customers: vec![customer_with_number("Charles", "123-4567")],
        };
        assert!(matches!(
            Library::try_from(seed),
            Err(SetupError::Registry(
                crate::application::RegistryError::DuplicateTitle { kind: "Book", .. }
            ))
        ));
    }

    #[test]
    fn test_try_from_seed_rejects_invalid_rating() {
        let seed = SeedData {
            movies: vec![crate::ports::MovieSeed {
                title: "Pulp Fiction".to_string(),
                year: "1994".to_string(),
                director: "Quentin Tarantino".to_string(),
                rating: Some(0),
            }],
            ..Default::default()
        };
        assert!(matches!(
            Library::try_from(seed),
            Err(SetupError::InvalidEntry(_))
        ));
    }

    #[test]
    fn test_standard_command_order() {
        let names: Vec<String> = standard_commands()
            .iter()
            .map(|command| command.display())
            .collect();
        assert_eq!(
            names,
            vec![
                "Login: <Library Number> <Password>",
                "List Books",
                "Checkout Book: <Title>",
                "Return Book: <Title>",
                "List Movies",
                "Checkout Movie: <Title>",
                "Return Movie: <Title>",
                "My Details",
                "Logout",
                "Quit",
            ]
        );
    }

    #[rstest]
    fn test_list_movies(mut library: Library) {
        let reply = standard_dispatcher()
            .execute(&mut library, "List Movies")
            .unwrap();
        assert_eq!(
            reply,
            Reply::Items {
                headers: "Title, Director, Year, Rating",
                rows: vec![
                    "Kill Bill, Quentin Tarantino, 2003, Unrated".to_string(),
                    "Pulp Fiction, Quentin Tarantino, 1994, 9".to_string(),
                ],
            }
        );
    }

    #[rstest]
    fn test_checkout_attributes_current_customer(mut library: Library) {
        let dispatcher = standard_dispatcher();
        dispatcher
            .execute(&mut library, "Login: 123-4567 Password1")
            .unwrap();

        let reply = dispatcher
            .execute(&mut library, "Checkout Movie: Kill Bill")
            .unwrap();

        assert_eq!(reply, Reply::CheckedOut { kind: "Movie" });
        let movie = library.movies.find_by_title("Kill Bill").unwrap();
        assert_eq!(
            movie.checked_out_by().map(|c| c.library_number().as_str()),
            Ok("123-4567")
        );
    }

    #[rstest]
    #[case("Login: 123-4567")]
    #[case("Login: 123-4567 Password1 extra")]
    #[case("Login")]
    fn test_login_with_malformed_argument(mut library: Library, #[case] line: &str) {
        let result = standard_dispatcher().execute(&mut library, line);
        assert!(matches!(result, Err(CatalogError::UnknownCommand(_))));
        assert!(!library.is_logged_in());
    }

    #[rstest]
    fn test_checkout_without_title_is_not_found(mut library: Library) {
        let dispatcher = standard_dispatcher();
        dispatcher
            .execute(&mut library, "Login: 123-4567 Password1")
            .unwrap();

        // 引数区切りがない場合
        assert_eq!(
            dispatcher.execute(&mut library, "Checkout Book"),
            Err(CatalogError::NotFound { kind: "Book" })
        );
        let rows = book_rows(dispatcher.execute(&mut library, "List Books").unwrap());
        assert_eq!(rows.len(), 3);
    }

    #[rstest]
    fn test_my_details(mut library: Library) {
        let dispatcher = standard_dispatcher();
        assert_eq!(
            dispatcher.execute(&mut library, "My Details"),
            Err(CatalogError::AuthRequired)
        );

        dispatcher
            .execute(&mut library, "Login: 123-4567 Password1")
            .unwrap();
        assert_eq!(
            dispatcher.execute(&mut library, "My Details"),
            Ok(Reply::Details(
                "Name: Charles Dickens\nEmail Address: charles@example.com".to_string()
            ))
        );
    }

    #[rstest]
    fn test_logout_then_checkout_requires_login(mut library: Library) {
        let dispatcher = standard_dispatcher();
        dispatcher
            .execute(&mut library, "Login: 123-4567 Password1")
            .unwrap();
        assert_eq!(dispatcher.execute(&mut library, "Logout"), Ok(Reply::LoggedOut));

        assert_eq!(
            dispatcher.execute(&mut library, "Checkout Book: Bleak House"),
            Err(CatalogError::AuthRequired)
        );
        assert!(library.books.find_by_title("Bleak House").unwrap().is_available());
    }
}
