use crate::api::*;
use crate::db::{NewParty, NewProp, DB};
use crate::error::{LedgerError, LedgerResult};
use crate::money::{from_cents, to_cents};
use crate::odds;
use crate::settings::Settings;
use crate::settlement::SettlementEngine;
use log::debug;
use rand::Rng;
use rust_decimal::Decimal;
use std::sync::Arc;

const JOIN_CODE_LENGTH: usize = 6;
const JOIN_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub struct PropBook {
    db: Arc<Box<dyn DB + Send + Sync>>,
    settlement: SettlementEngine,
    join_code_attempts: u32,
}

fn random_join_code() -> String {
    let mut rng = rand::thread_rng();
    (0..JOIN_CODE_LENGTH)
        .map(|_| JOIN_CODE_CHARSET[rng.gen_range(0..JOIN_CODE_CHARSET.len())] as char)
        .collect()
}
fn non_empty(value: &str, what: &'static str) -> LedgerResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LedgerError::InvalidProp(what));
    }
    Ok(value.to_string())
}
fn check_options(option1: &str, option2: &str) -> LedgerResult<()> {
    if option1 == option2 {
        return Err(LedgerError::InvalidProp("options must differ"));
    }
    Ok(())
}

impl PropBook {
    pub fn new(db: Box<dyn DB + Send + Sync>, settings: &Settings) -> Self {
        let db = Arc::new(db);
        Self {
            settlement: SettlementEngine::new(db.clone(), settings.settlement.clone()),
            db,
            join_code_attempts: settings.party.join_code_attempts.max(1),
        }
    }

    /// Returns a random code that no party currently uses.
    pub async fn generate_join_code(&self) -> LedgerResult<String> {
        for _ in 0..self.join_code_attempts {
            let code = random_join_code();
            if !self.db.join_code_in_use(&code).await? {
                return Ok(code);
            }
        }
        Err(LedgerError::JoinCodeExhausted(self.join_code_attempts))
    }
    pub async fn create_party(
        &self,
        host: &str,
        name: &str,
        starting_balance: Decimal,
    ) -> LedgerResult<Party> {
        let starting_balance = to_cents(starting_balance)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidParty("name must not be empty"));
        }
        for _ in 0..self.join_code_attempts {
            let join_code = self.generate_join_code().await?;
            let created = self
                .db
                .create_party(NewParty {
                    name: name.to_string(),
                    host: host.to_string(),
                    join_code,
                    starting_balance,
                })
                .await?;
            if let Some(party) = created {
                debug!(
                    "Created party {} ({}) hosted by {}",
                    party.id, party.join_code, host
                );
                return Ok(party);
            }
        }
        Err(LedgerError::JoinCodeExhausted(self.join_code_attempts))
    }
    pub async fn join_party(&self, user: &str, join_code: &str) -> LedgerResult<Member> {
        let party = self
            .db
            .get_party_by_code(&join_code.trim().to_uppercase())
            .await?;
        let member = self
            .db
            .add_member(party.id, user, to_cents(party.starting_balance)?)
            .await?;
        debug!("{} joined party {}", user, party.id);
        Ok(member)
    }
    /// Removes a member. Their balance and wagers are forfeited.
    pub async fn leave_party(&self, party: RowId, user: &str) -> LedgerResult<()> {
        let current = self.db.get_party(party).await?;
        if current.host == user {
            return Err(LedgerError::HostCannotLeave(party));
        }
        self.db.remove_member(party, user).await?;
        debug!("{} left party {}", user, party);
        Ok(())
    }
    pub async fn delete_party(&self, party: RowId, requester: &str) -> LedgerResult<()> {
        let current = self.db.get_party(party).await?;
        if current.host != requester {
            return Err(LedgerError::NotHost(party));
        }
        self.db.delete_party(party).await?;
        debug!("Deleted party {}", party);
        Ok(())
    }
    pub async fn get_party(&self, party: RowId) -> LedgerResult<Party> {
        self.db.get_party(party).await
    }
    pub async fn get_parties(&self, user: &str) -> LedgerResult<Vec<Party>> {
        self.db.list_parties(user).await
    }

    pub async fn create_prop(
        &self,
        creator: &str,
        party: RowId,
        title: &str,
        description: &str,
        (option1, odds1): (&str, AmericanOdds),
        (option2, odds2): (&str, AmericanOdds),
    ) -> LedgerResult<Prop> {
        self.db.get_party(party).await?;
        self.db.get_member(party, creator).await?;
        let prop = NewProp {
            party,
            creator: creator.to_string(),
            title: non_empty(title, "title must not be empty")?,
            description: description.trim().to_string(),
            option1: non_empty(option1, "options must not be empty")?,
            odds1: odds::validate_odds(odds1)?,
            option2: non_empty(option2, "options must not be empty")?,
            odds2: odds::validate_odds(odds2)?,
        };
        check_options(&prop.option1, &prop.option2)?;
        let prop = self.db.create_prop(prop).await?;
        debug!("{} created prop {} in party {}", creator, prop.id, party);
        Ok(prop)
    }
    /// Changes an open prop. Wagers already placed keep their odds, and
    /// the option names they were placed on can no longer change.
    pub async fn edit_prop(
        &self,
        prop: RowId,
        requester: &str,
        edit: PropEdit,
    ) -> LedgerResult<Prop> {
        let current = self.db.get_prop(prop).await?;
        if current.is_resolved() {
            return Err(LedgerError::PropResolved(prop));
        }
        if current.creator != requester {
            let party = self.db.get_party(current.party).await?;
            if party.host != requester {
                return Err(LedgerError::NotCreator(prop));
            }
        }
        let edit = PropEdit {
            title: edit
                .title
                .map(|t| non_empty(&t, "title must not be empty"))
                .transpose()?,
            description: edit.description.map(|d| d.trim().to_string()),
            option1: edit
                .option1
                .map(|o| non_empty(&o, "options must not be empty"))
                .transpose()?,
            odds1: edit.odds1.map(odds::validate_odds).transpose()?,
            option2: edit
                .option2
                .map(|o| non_empty(&o, "options must not be empty"))
                .transpose()?,
            odds2: edit.odds2.map(odds::validate_odds).transpose()?,
        };
        check_options(
            edit.option1.as_deref().unwrap_or(&current.option1),
            edit.option2.as_deref().unwrap_or(&current.option2),
        )?;
        let prop = self.db.edit_prop(prop, &edit).await?;
        debug!("{} edited prop {}", requester, prop.id);
        Ok(prop)
    }
    pub async fn get_prop(&self, prop: RowId) -> LedgerResult<Prop> {
        self.db.get_prop(prop).await
    }
    pub async fn get_props(&self, party: RowId) -> LedgerResult<Vec<Prop>> {
        self.db.get_party(party).await?;
        self.db.list_props(party).await
    }

    /// Debits `stake` and records a wager on `choice` at its current odds.
    pub async fn place_wager(
        &self,
        user: &str,
        prop: RowId,
        choice: &str,
        stake: Decimal,
    ) -> LedgerResult<Wager> {
        let stake = to_cents(stake)?;
        let wager = self.db.place_wager(user, prop, choice, stake).await?;
        debug!(
            "{} wagered {} on {} of prop {} at {}",
            user, wager.stake, choice, prop, wager.odds
        );
        Ok(wager)
    }
    pub async fn resolve_prop(
        &self,
        prop: RowId,
        winning_choice: &str,
        requester: &str,
    ) -> LedgerResult<SettlementReport> {
        self.settlement
            .resolve(prop, winning_choice, requester)
            .await
    }
    pub async fn resettle_prop(
        &self,
        prop: RowId,
        requester: &str,
    ) -> LedgerResult<SettlementReport> {
        self.settlement.resettle(prop, requester).await
    }

    pub async fn get_balance(&self, party: RowId, user: &str) -> LedgerResult<Decimal> {
        Ok(self.db.get_member(party, user).await?.balance)
    }
    pub async fn get_leaderboard(
        &self,
        party: RowId,
        current: &str,
    ) -> LedgerResult<Vec<LeaderboardEntry>> {
        self.db.get_party(party).await?;
        let members = self.db.list_members(party).await?;
        Ok(crate::leaderboard::build(&members, current))
    }
    /// Wagers of a member, newest first, with what each pays or paid.
    pub async fn get_wagers(&self, party: RowId, user: &str) -> LedgerResult<Vec<WagerResponse>> {
        self.db.get_member(party, user).await?;
        let mut wagers = vec![];
        for wager in self.db.list_member_wagers(party, user).await? {
            let payout = match wager.status {
                WagerStatus::Active | WagerStatus::Win => odds::payout(wager.stake, wager.odds)?,
                WagerStatus::Loss => from_cents(0),
            };
            wagers.push(WagerResponse { wager, payout });
        }
        Ok(wagers)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::db::SQLite;
    use futures_util::future::join_all;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    async fn book_on(url: &str, max_connections: u32) -> PropBook {
        PropBook::new(
            Box::new(SQLite::new(url, max_connections).await.unwrap()),
            &Settings::default(),
        )
    }
    async fn book() -> PropBook {
        book_on("sqlite::memory:", 1).await
    }
    /// Backed by a database file so that concurrent calls really run on
    /// separate connections.
    async fn file_book(dir: &TempDir) -> PropBook {
        let url = format!("sqlite://{}", dir.path().join("propbook.db").display());
        book_on(&url, 4).await
    }
    async fn party_of(book: &PropBook, users: &[&str], balance: Decimal) -> Party {
        let party = book.create_party("host", "Game night", balance).await.unwrap();
        for user in users {
            book.join_party(user, &party.join_code).await.unwrap();
        }
        party
    }
    async fn coin_flip(book: &PropBook, party: RowId) -> Prop {
        book.create_prop(
            "host",
            party,
            "Coin flip",
            "Best of one",
            ("Heads", -150),
            ("Tails", 120),
        )
        .await
        .unwrap()
    }

    async fn create_prop(
        book: &PropBook,
        creator: &str,
        party: RowId,
        option1: (&str, AmericanOdds),
        option2: (&str, AmericanOdds),
    ) -> LedgerResult<Prop> {
        book.create_prop(creator, party, "Title", "", option1, option2)
            .await
    }

    #[tokio::test]
    async fn it_works() {
        let book = book().await;
        let party = party_of(&book, &["a", "b"], dec!(100)).await;
        let prop = coin_flip(&book, party.id).await;

        let wa = book.place_wager("a", prop.id, "Heads", dec!(100)).await.unwrap();
        let wb = book.place_wager("b", prop.id, "Tails", dec!(50)).await.unwrap();
        assert_eq!(book.get_balance(party.id, "a").await.unwrap(), dec!(0));
        assert_eq!(book.get_balance(party.id, "b").await.unwrap(), dec!(50));

        let report = book.resolve_prop(prop.id, "Heads", "host").await.unwrap();
        assert_eq!(report.winners, 1);
        assert_eq!(report.losers, 1);
        assert_eq!(report.total_paid_out, dec!(166.67));
        assert!(report.unsettled.is_empty());

        assert_eq!(book.get_balance(party.id, "a").await.unwrap(), dec!(166.67));
        assert_eq!(book.get_balance(party.id, "b").await.unwrap(), dec!(50));
        let a = book.get_wagers(party.id, "a").await.unwrap();
        assert_eq!(a[0].wager.id, wa.id);
        assert_eq!(a[0].wager.status, WagerStatus::Win);
        assert_eq!(a[0].payout, dec!(166.67));
        let b = book.get_wagers(party.id, "b").await.unwrap();
        assert_eq!(b[0].wager.id, wb.id);
        assert_eq!(b[0].wager.status, WagerStatus::Loss);
        assert_eq!(b[0].payout, dec!(0));

        let board = book.get_leaderboard(party.id, "b").await.unwrap();
        let order: Vec<&str> = board.iter().map(|e| e.user.as_str()).collect();
        assert_eq!(order, vec!["a", "host", "b"]);
        assert!(board[2].is_current);
    }

    #[tokio::test]
    async fn favourite_wins_against_underdog() {
        let book = book().await;
        let party = party_of(&book, &["a", "b"], dec!(100)).await;
        let prop = coin_flip(&book, party.id).await;
        book.place_wager("a", prop.id, "Heads", dec!(50)).await.unwrap();
        book.place_wager("b", prop.id, "Tails", dec!(30)).await.unwrap();

        let report = book.resolve_prop(prop.id, "Heads", "host").await.unwrap();
        assert_eq!(report.winners, 1);
        assert_eq!(report.losers, 1);
        assert_eq!(report.total_paid_out, dec!(83.33));

        assert_eq!(book.get_balance(party.id, "a").await.unwrap(), dec!(133.33));
        assert_eq!(book.get_balance(party.id, "b").await.unwrap(), dec!(70));
        let a = book.get_wagers(party.id, "a").await.unwrap();
        assert_eq!(a[0].wager.status, WagerStatus::Win);
        assert_eq!(a[0].wager.status.to_string(), "win");
        let b = book.get_wagers(party.id, "b").await.unwrap();
        assert_eq!(b[0].wager.status, WagerStatus::Loss);
        assert_eq!(b[0].wager.status.to_string(), "loss");
    }

    #[tokio::test]
    async fn rejected_wager_changes_nothing() {
        let book = book().await;
        let party = party_of(&book, &["a"], dec!(100)).await;
        let prop = coin_flip(&book, party.id).await;
        book.place_wager("a", prop.id, "Tails", dec!(60)).await.unwrap();

        assert!(matches!(
            book.place_wager("a", prop.id, "Tails", dec!(40.01)).await,
            Err(LedgerError::InsufficientFunds { .. })
        ));
        assert!(matches!(
            book.place_wager("a", prop.id, "Tails", dec!(0)).await,
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            book.place_wager("a", prop.id, "Tails", dec!(1.001)).await,
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(matches!(
            book.place_wager("a", prop.id, "Edge", dec!(1)).await,
            Err(LedgerError::InvalidChoice(_))
        ));
        assert_eq!(book.get_balance(party.id, "a").await.unwrap(), dec!(40));
        assert_eq!(book.get_wagers(party.id, "a").await.unwrap().len(), 1);

        // the whole balance can be staked
        book.place_wager("a", prop.id, "Heads", dec!(40)).await.unwrap();
        assert_eq!(book.get_balance(party.id, "a").await.unwrap(), dec!(0));
    }

    async fn wager_concurrently(book: PropBook) {
        let book = Arc::new(book);
        let party = party_of(&book, &["a"], dec!(100)).await;
        let prop = coin_flip(&book, party.id).await.id;

        let tasks = (0..30).map(|i| {
            let book = book.clone();
            let choice = if i % 2 == 0 { "Heads" } else { "Tails" };
            tokio::spawn(async move { book.place_wager("a", prop, choice, dec!(5)).await })
        });
        let results = join_all(tasks).await;
        let placed = results.iter().filter(|r| matches!(r, Ok(Ok(_)))).count();
        let broke = results
            .iter()
            .filter(|r| matches!(r, Ok(Err(LedgerError::InsufficientFunds { .. }))))
            .count();
        assert_eq!(placed, 20);
        assert_eq!(broke, 10);
        assert_eq!(book.get_balance(party.id, "a").await.unwrap(), dec!(0));
        let staked: Decimal = book
            .get_wagers(party.id, "a")
            .await
            .unwrap()
            .iter()
            .map(|w| w.wager.stake)
            .sum();
        assert_eq!(staked, dec!(100));
    }

    #[tokio::test]
    async fn concurrent_wagers_spend_exactly_the_balance() {
        wager_concurrently(book().await).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_wagers_spend_exactly_the_balance_across_connections() {
        let dir = TempDir::new().unwrap();
        wager_concurrently(file_book(&dir).await).await;
    }

    async fn race_resolution(book: PropBook) {
        let book = Arc::new(book);
        let party = party_of(&book, &["a", "b"], dec!(100)).await;
        let prop = coin_flip(&book, party.id).await.id;

        let mut tasks = vec![];
        for user in ["a", "b"] {
            for _ in 0..10 {
                let book = book.clone();
                tasks.push(tokio::spawn(async move {
                    book.place_wager(user, prop, "Tails", dec!(1)).await
                }));
            }
        }
        let resolver = {
            let book = book.clone();
            tokio::spawn(async move { book.resolve_prop(prop, "Tails", "host").await })
        };
        let mut placed = 0;
        for result in join_all(tasks).await {
            match result.unwrap() {
                Ok(_) => placed += 1,
                Err(LedgerError::PropResolved(_)) => {}
                Err(e) => panic!("unexpected error {}", e),
            }
        }
        let report = resolver.await.unwrap().unwrap();
        assert_eq!(report.winners, placed);
        for user in ["a", "b"] {
            let wagers = book.get_wagers(party.id, user).await.unwrap();
            assert!(wagers.iter().all(|w| w.wager.status == WagerStatus::Win));
        }
        // every placed wager at +120 returned 2.20
        let total = book.get_balance(party.id, "a").await.unwrap()
            + book.get_balance(party.id, "b").await.unwrap();
        assert_eq!(total, dec!(200) + dec!(1.20) * Decimal::from(placed));
    }

    #[tokio::test]
    async fn wagers_racing_resolution_are_all_settled() {
        race_resolution(book().await).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn wagers_racing_resolution_are_all_settled_across_connections() {
        let dir = TempDir::new().unwrap();
        race_resolution(file_book(&dir).await).await;
    }

    #[tokio::test]
    async fn resolution_is_final() {
        let book = book().await;
        let party = party_of(&book, &["a"], dec!(100)).await;
        let prop = coin_flip(&book, party.id).await;
        assert!(matches!(
            book.resolve_prop(prop.id, "Heads", "a").await,
            Err(LedgerError::NotHost(_))
        ));
        book.resolve_prop(prop.id, "Heads", "host").await.unwrap();
        assert!(matches!(
            book.resolve_prop(prop.id, "Tails", "host").await,
            Err(LedgerError::AlreadyResolved(_))
        ));
        assert!(matches!(
            book.place_wager("a", prop.id, "Heads", dec!(1)).await,
            Err(LedgerError::PropResolved(_))
        ));
        assert!(matches!(
            book.edit_prop(prop.id, "host", PropEdit::default()).await,
            Err(LedgerError::PropResolved(_))
        ));
        let prop = book.get_prop(prop.id).await.unwrap();
        assert_eq!(prop.winning_choice.as_deref(), Some("Heads"));
        let report = book.resettle_prop(prop.id, "host").await.unwrap();
        assert_eq!(report.winners + report.losers, 0);
    }

    #[tokio::test]
    async fn props_are_validated() {
        let book = book().await;
        let party = party_of(&book, &["a"], dec!(100)).await;
        assert!(matches!(
            create_prop(&book, "host", party.id, ("Yes", 0), ("No", 100)).await,
            Err(LedgerError::InvalidOdds)
        ));
        assert!(matches!(
            create_prop(&book, "host", party.id, ("Yes", 100), ("Yes", 100)).await,
            Err(LedgerError::InvalidProp(_))
        ));
        assert!(matches!(
            create_prop(&book, "host", party.id, (" ", 100), ("No", 100)).await,
            Err(LedgerError::InvalidProp(_))
        ));
        assert!(matches!(
            create_prop(&book, "stranger", party.id, ("Yes", 100), ("No", 100)).await,
            Err(LedgerError::MemberNotFound { .. })
        ));
        let prop = create_prop(&book, "a", party.id, ("Yes", -110), ("No", -110))
            .await
            .unwrap();
        assert_eq!(book.get_props(party.id).await.unwrap(), vec![prop]);
    }

    #[tokio::test]
    async fn editing_props() {
        let book = book().await;
        let party = party_of(&book, &["a", "b"], dec!(100)).await;
        let prop = book
            .create_prop("a", party.id, "Rain?", "", ("Yes", 200), ("No", -300))
            .await
            .unwrap();
        let wager = book.place_wager("b", prop.id, "Yes", dec!(10)).await.unwrap();

        assert!(matches!(
            book.edit_prop(prop.id, "b", PropEdit::default()).await,
            Err(LedgerError::NotCreator(_))
        ));
        assert!(matches!(
            book.edit_prop(
                prop.id,
                "a",
                PropEdit {
                    option2: Some("Yes".into()),
                    ..Default::default()
                }
            )
            .await,
            Err(LedgerError::InvalidProp(_))
        ));
        let edited = book
            .edit_prop(
                prop.id,
                "host",
                PropEdit {
                    odds1: Some(100),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(edited.odds1, 100);
        assert_eq!(edited.wager_count, 1);

        book.resolve_prop(prop.id, "Yes", "host").await.unwrap();
        // paid at the odds of placement
        assert_eq!(book.get_balance(party.id, "b").await.unwrap(), dec!(120));
        assert_eq!(
            book.get_wagers(party.id, "b").await.unwrap()[0].wager.odds,
            wager.odds
        );
    }

    #[tokio::test]
    async fn renaming_a_wagered_option_is_rejected() {
        let book = book().await;
        let party = party_of(&book, &["a"], dec!(100)).await;
        let prop = book
            .create_prop("host", party.id, "Toss", "", ("Heads", 100), ("Tails", 100))
            .await
            .unwrap();
        book.place_wager("a", prop.id, "Heads", dec!(50)).await.unwrap();

        assert!(matches!(
            book.edit_prop(
                prop.id,
                "host",
                PropEdit {
                    option1: Some("Over".into()),
                    ..Default::default()
                }
            )
            .await,
            Err(LedgerError::InvalidProp(_))
        ));
        assert!(matches!(
            book.resolve_prop(prop.id, "Over", "host").await,
            Err(LedgerError::InvalidChoice(_))
        ));
        let report = book.resolve_prop(prop.id, "Heads", "host").await.unwrap();
        assert_eq!(report.winners, 1);
        assert_eq!(book.get_balance(party.id, "a").await.unwrap(), dec!(150));
    }

    #[tokio::test]
    async fn party_lifecycle() {
        let book = book().await;
        let party = book.create_party("host", " Poker ", dec!(25.50)).await.unwrap();
        assert_eq!(party.name, "Poker");
        assert_eq!(party.join_code.len(), 6);
        assert!(party
            .join_code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert_eq!(book.get_balance(party.id, "host").await.unwrap(), dec!(25.50));

        let member = book
            .join_party("a", &party.join_code.to_lowercase())
            .await
            .unwrap();
        assert_eq!(member.balance, dec!(25.50));
        assert!(matches!(
            book.join_party("a", &party.join_code).await,
            Err(LedgerError::AlreadyMember { .. })
        ));
        assert!(matches!(
            book.join_party("b", "NOPE00").await,
            Err(LedgerError::PartyNotFound(_))
        ));
        assert_eq!(book.get_parties("a").await.unwrap(), vec![party.clone()]);

        assert!(matches!(
            book.leave_party(party.id, "host").await,
            Err(LedgerError::HostCannotLeave(_))
        ));
        book.leave_party(party.id, "a").await.unwrap();
        assert!(matches!(
            book.get_balance(party.id, "a").await,
            Err(LedgerError::MemberNotFound { .. })
        ));
        assert!(book.get_parties("a").await.unwrap().is_empty());

        assert!(matches!(
            book.delete_party(party.id, "a").await,
            Err(LedgerError::NotHost(_))
        ));
        book.delete_party(party.id, "host").await.unwrap();
        assert!(matches!(
            book.get_party(party.id).await,
            Err(LedgerError::PartyNotFound(_))
        ));
        assert!(matches!(
            book.create_party("host", "Broke", dec!(0)).await,
            Err(LedgerError::InvalidAmount(_))
        ));
    }

    #[tokio::test]
    async fn leaderboard_ties() {
        let book = book().await;
        let party = party_of(&book, &["a", "b"], dec!(100)).await;
        let prop = coin_flip(&book, party.id).await;
        book.place_wager("b", prop.id, "Heads", dec!(20)).await.unwrap();

        let board = book.get_leaderboard(party.id, "a").await.unwrap();
        let ranks: Vec<(&str, u32, bool)> = board
            .iter()
            .map(|e| (e.user.as_str(), e.rank, e.tied))
            .collect();
        assert_eq!(
            ranks,
            vec![("host", 1, true), ("a", 1, true), ("b", 3, false)]
        );
        assert!(board[1].is_current);
        assert!(matches!(
            book.get_leaderboard(404, "a").await,
            Err(LedgerError::PartyNotFound(_))
        ));
    }
}
