use crate::api::*;
use crate::error::{LedgerError, LedgerResult};
use crate::money::from_cents;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use log::{debug, trace};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteConnection, SqliteJournalMode, SqlitePoolOptions, SqliteRow,
};
use sqlx::{query, Executor, Row, SqlitePool};
use std::str::FromStr;
use std::time::Duration;

pub struct NewParty {
    pub name: String,
    pub host: UserId,
    pub join_code: String,
    pub starting_balance: Cents,
}
pub struct NewProp {
    pub party: RowId,
    pub creator: UserId,
    pub title: String,
    pub description: String,
    pub option1: String,
    pub odds1: AmericanOdds,
    pub option2: String,
    pub odds2: AmericanOdds,
}
/// Result of settling one wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WagerOutcome {
    Win { payout: Cents },
    Loss,
}

#[async_trait]
pub trait DB {
    /// Inserts the party and its host membership. Returns `None` if the join
    /// code got taken in the meantime.
    async fn create_party(&self, party: NewParty) -> LedgerResult<Option<Party>>;
    async fn get_party(&self, party: RowId) -> LedgerResult<Party>;
    async fn get_party_by_code(&self, join_code: &str) -> LedgerResult<Party>;
    async fn join_code_in_use(&self, join_code: &str) -> LedgerResult<bool>;
    async fn list_parties(&self, user: &str) -> LedgerResult<Vec<Party>>;
    /// Deletes the party together with its members, props and wagers.
    async fn delete_party(&self, party: RowId) -> LedgerResult<()>;

    async fn add_member(&self, party: RowId, user: &str, balance: Cents) -> LedgerResult<Member>;
    async fn remove_member(&self, party: RowId, user: &str) -> LedgerResult<()>;
    async fn get_member(&self, party: RowId, user: &str) -> LedgerResult<Member>;
    async fn list_members(&self, party: RowId) -> LedgerResult<Vec<Member>>;
    /// Atomically subtracts `amount` if the balance covers it and returns the
    /// new balance.
    async fn debit(&self, party: RowId, user: &str, amount: Cents) -> LedgerResult<Cents>;
    /// Atomically adds `amount` and returns the new balance.
    async fn credit(&self, party: RowId, user: &str, amount: Cents) -> LedgerResult<Cents>;

    async fn create_prop(&self, prop: NewProp) -> LedgerResult<Prop>;
    async fn get_prop(&self, prop: RowId) -> LedgerResult<Prop>;
    async fn list_props(&self, party: RowId) -> LedgerResult<Vec<Prop>>;
    async fn edit_prop(&self, prop: RowId, edit: &PropEdit) -> LedgerResult<Prop>;
    /// Sets the winner of an open prop. This is the only write of the
    /// resolution fields and succeeds at most once per prop.
    async fn mark_resolved(&self, prop: RowId, winning_choice: &str) -> LedgerResult<Prop>;

    /// Debits the stake and records the wager as one unit.
    async fn place_wager(
        &self,
        user: &str,
        prop: RowId,
        choice: &str,
        stake: Cents,
    ) -> LedgerResult<Wager>;
    async fn list_active_wagers(&self, prop: RowId) -> LedgerResult<Vec<Wager>>;
    async fn list_member_wagers(&self, party: RowId, user: &str) -> LedgerResult<Vec<Wager>>;
    /// Moves an active wager to win or loss and credits the payout of a win,
    /// as one unit. Returns `false` if the wager was no longer active.
    async fn settle_wager(&self, wager: &Wager, outcome: WagerOutcome) -> LedgerResult<bool>;
}

pub struct SQLite {
    connection: SqlitePool,
}
impl SQLite {
    pub async fn new(url: &str, max_connections: u32) -> LedgerResult<Self> {
        let memory = url.contains(":memory:");
        let mut options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));
        if !memory {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }
        // every connection to sqlite::memory: opens its own database
        let pool = if memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };
        let connection = pool.connect_with(options).await?;
        connection
            .execute(
                "CREATE TABLE IF NOT EXISTS parties (\
                id INTEGER PRIMARY KEY,\
                name TEXT NOT NULL,\
                host TEXT NOT NULL,\
                join_code TEXT NOT NULL UNIQUE,\
                starting_balance_cents INTEGER NOT NULL CHECK (starting_balance_cents > 0),\
                created_at INTEGER NOT NULL\
                )",
            )
            .await?;
        connection
            .execute(
                "CREATE TABLE IF NOT EXISTS members (\
                party_id INTEGER NOT NULL REFERENCES parties(id) ON DELETE CASCADE,\
                user_id TEXT NOT NULL,\
                balance_cents INTEGER NOT NULL CHECK (balance_cents >= 0),\
                joined_at INTEGER NOT NULL,\
                PRIMARY KEY (party_id, user_id)\
                )",
            )
            .await?;
        connection
            .execute(
                "CREATE TABLE IF NOT EXISTS props (\
                id INTEGER PRIMARY KEY,\
                party_id INTEGER NOT NULL REFERENCES parties(id) ON DELETE CASCADE,\
                creator TEXT NOT NULL,\
                title TEXT NOT NULL,\
                description TEXT NOT NULL,\
                option1 TEXT NOT NULL,\
                odds1 INTEGER NOT NULL,\
                option2 TEXT NOT NULL,\
                odds2 INTEGER NOT NULL,\
                wager_count INTEGER NOT NULL DEFAULT 0,\
                created_at INTEGER NOT NULL,\
                resolved_at INTEGER,\
                winning_choice TEXT,\
                CHECK (option1 <> option2)\
                )",
            )
            .await?;
        connection
            .execute(
                "CREATE TABLE IF NOT EXISTS wagers (\
                id INTEGER PRIMARY KEY,\
                party_id INTEGER NOT NULL,\
                prop_id INTEGER NOT NULL REFERENCES props(id) ON DELETE CASCADE,\
                user_id TEXT NOT NULL,\
                choice TEXT NOT NULL,\
                odds INTEGER NOT NULL,\
                stake_cents INTEGER NOT NULL CHECK (stake_cents > 0),\
                placed_at INTEGER NOT NULL,\
                status TEXT NOT NULL DEFAULT 'active',\
                FOREIGN KEY (party_id, user_id) REFERENCES members(party_id, user_id) ON DELETE CASCADE\
                )",
            )
            .await?;
        connection
            .execute("CREATE INDEX IF NOT EXISTS wagers_by_prop ON wagers (prop_id, status)")
            .await?;
        connection
            .execute("CREATE INDEX IF NOT EXISTS wagers_by_member ON wagers (party_id, user_id)")
            .await?;
        debug!("Opened database {}", url);
        Ok(Self { connection })
    }
}

fn now() -> i64 {
    Utc::now().timestamp_millis()
}
fn timestamp(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).single().unwrap_or_default()
}
fn party_from_row(row: &SqliteRow) -> Party {
    Party {
        id: row.get("id"),
        name: row.get("name"),
        host: row.get("host"),
        join_code: row.get("join_code"),
        starting_balance: from_cents(row.get("starting_balance_cents")),
        created_at: timestamp(row.get("created_at")),
    }
}
fn member_from_row(row: &SqliteRow) -> Member {
    Member {
        party: row.get("party_id"),
        user: row.get("user_id"),
        balance: from_cents(row.get("balance_cents")),
        joined_at: timestamp(row.get("joined_at")),
    }
}
fn prop_from_row(row: &SqliteRow) -> Prop {
    Prop {
        id: row.get("id"),
        party: row.get("party_id"),
        creator: row.get("creator"),
        title: row.get("title"),
        description: row.get("description"),
        option1: row.get("option1"),
        odds1: row.get("odds1"),
        option2: row.get("option2"),
        odds2: row.get("odds2"),
        wager_count: row.get("wager_count"),
        created_at: timestamp(row.get("created_at")),
        resolved_at: row.get::<Option<i64>, _>("resolved_at").map(timestamp),
        winning_choice: row.get("winning_choice"),
    }
}
fn wager_from_row(row: &SqliteRow) -> LedgerResult<Wager> {
    let status: String = row.get("status");
    let status =
        WagerStatus::from_str(&status).map_err(|e| LedgerError::Corrupt(e.to_string()))?;
    Ok(Wager {
        id: row.get("id"),
        party: row.get("party_id"),
        prop: row.get("prop_id"),
        user: row.get("user_id"),
        choice: row.get("choice"),
        odds: row.get("odds"),
        stake: from_cents(row.get("stake_cents")),
        placed_at: timestamp(row.get("placed_at")),
        status,
    })
}
fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(e) => e.is_unique_violation(),
        _ => false,
    }
}
fn is_check_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(e) => e.is_check_violation(),
        _ => false,
    }
}
fn map_prop_write_err(e: sqlx::Error) -> LedgerError {
    if is_check_violation(&e) {
        LedgerError::InvalidProp("options must differ")
    } else {
        e.into()
    }
}

async fn member_exists(conn: &mut SqliteConnection, party: RowId, user: &str) -> LedgerResult<bool> {
    let row = query("SELECT 1 FROM members WHERE party_id = ? AND user_id = ?")
        .bind(party)
        .bind(user)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.is_some())
}
async fn debit_on(
    conn: &mut SqliteConnection,
    party: RowId,
    user: &str,
    amount: Cents,
) -> LedgerResult<Cents> {
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount(from_cents(amount).to_string()));
    }
    let row = query(
        "UPDATE members \
        SET balance_cents = balance_cents - ? \
        WHERE party_id = ? AND user_id = ? AND balance_cents >= ? \
        RETURNING balance_cents",
    )
    .bind(amount)
    .bind(party)
    .bind(user)
    .bind(amount)
    .fetch_optional(&mut *conn)
    .await?;
    if let Some(row) = row {
        return Ok(row.get("balance_cents"));
    }
    if member_exists(conn, party, user).await? {
        Err(LedgerError::InsufficientFunds {
            party,
            user: user.to_string(),
        })
    } else {
        Err(LedgerError::member_not_found(party, user))
    }
}
async fn credit_on(
    conn: &mut SqliteConnection,
    party: RowId,
    user: &str,
    amount: Cents,
) -> LedgerResult<Cents> {
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount(from_cents(amount).to_string()));
    }
    let row = query(
        "UPDATE members \
        SET balance_cents = balance_cents + ? \
        WHERE party_id = ? AND user_id = ? \
        RETURNING balance_cents",
    )
    .bind(amount)
    .bind(party)
    .bind(user)
    .fetch_optional(&mut *conn)
    .await?;
    row.map(|row| row.get("balance_cents"))
        .ok_or_else(|| LedgerError::member_not_found(party, user))
}

#[async_trait]
impl DB for SQLite {
    async fn create_party(&self, party: NewParty) -> LedgerResult<Option<Party>> {
        let created_at = now();
        let mut tx = self.connection.begin().await?;
        let inserted = query(
            "INSERT INTO parties (\
            name,\
            host,\
            join_code,\
            starting_balance_cents,\
            created_at) \
            VALUES (?,?,?,?,?)",
        )
        .bind(&party.name)
        .bind(&party.host)
        .bind(&party.join_code)
        .bind(party.starting_balance)
        .bind(created_at)
        .execute(&mut *tx)
        .await;
        let id = match inserted {
            Ok(result) => result.last_insert_rowid(),
            Err(e) if is_unique_violation(&e) => {
                debug!("Join code {} was taken concurrently", party.join_code);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        query(
            "INSERT INTO members (\
            party_id,\
            user_id,\
            balance_cents,\
            joined_at) \
            VALUES (?,?,?,?)",
        )
        .bind(id)
        .bind(&party.host)
        .bind(party.starting_balance)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(Some(Party {
            id,
            name: party.name,
            host: party.host,
            join_code: party.join_code,
            starting_balance: from_cents(party.starting_balance),
            created_at: timestamp(created_at),
        }))
    }
    async fn get_party(&self, party: RowId) -> LedgerResult<Party> {
        self.connection
            .fetch_optional(query("SELECT * FROM parties WHERE id = ?").bind(party))
            .await?
            .map(|row| party_from_row(&row))
            .ok_or_else(|| LedgerError::PartyNotFound(party.to_string()))
    }
    async fn get_party_by_code(&self, join_code: &str) -> LedgerResult<Party> {
        self.connection
            .fetch_optional(query("SELECT * FROM parties WHERE join_code = ?").bind(join_code))
            .await?
            .map(|row| party_from_row(&row))
            .ok_or_else(|| LedgerError::PartyNotFound(join_code.to_string()))
    }
    async fn join_code_in_use(&self, join_code: &str) -> LedgerResult<bool> {
        let row = self
            .connection
            .fetch_optional(query("SELECT 1 FROM parties WHERE join_code = ?").bind(join_code))
            .await?;
        Ok(row.is_some())
    }
    async fn list_parties(&self, user: &str) -> LedgerResult<Vec<Party>> {
        let stmt = query(
            "SELECT parties.* FROM parties \
            JOIN members ON members.party_id = parties.id \
            WHERE members.user_id = ? \
            ORDER BY parties.created_at, parties.id",
        );
        let rows = self.connection.fetch_all(stmt.bind(user)).await?;
        Ok(rows.iter().map(party_from_row).collect())
    }
    async fn delete_party(&self, party: RowId) -> LedgerResult<()> {
        let deleted = self
            .connection
            .execute(query("DELETE FROM parties WHERE id = ?").bind(party))
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(LedgerError::PartyNotFound(party.to_string()));
        }
        Ok(())
    }
    async fn add_member(&self, party: RowId, user: &str, balance: Cents) -> LedgerResult<Member> {
        let joined_at = now();
        let inserted = self
            .connection
            .execute(
                query(
                    "INSERT INTO members (\
                    party_id,\
                    user_id,\
                    balance_cents,\
                    joined_at) \
                    VALUES (?,?,?,?)",
                )
                .bind(party)
                .bind(user)
                .bind(balance)
                .bind(joined_at),
            )
            .await;
        match inserted {
            Ok(_) => Ok(Member {
                party,
                user: user.to_string(),
                balance: from_cents(balance),
                joined_at: timestamp(joined_at),
            }),
            Err(e) if is_unique_violation(&e) => Err(LedgerError::AlreadyMember {
                party,
                user: user.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
    async fn remove_member(&self, party: RowId, user: &str) -> LedgerResult<()> {
        let deleted = self
            .connection
            .execute(
                query("DELETE FROM members WHERE party_id = ? AND user_id = ?")
                    .bind(party)
                    .bind(user),
            )
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(LedgerError::member_not_found(party, user));
        }
        Ok(())
    }
    async fn get_member(&self, party: RowId, user: &str) -> LedgerResult<Member> {
        self.connection
            .fetch_optional(
                query("SELECT * FROM members WHERE party_id = ? AND user_id = ?")
                    .bind(party)
                    .bind(user),
            )
            .await?
            .map(|row| member_from_row(&row))
            .ok_or_else(|| LedgerError::member_not_found(party, user))
    }
    async fn list_members(&self, party: RowId) -> LedgerResult<Vec<Member>> {
        let stmt = query(
            "SELECT * FROM members \
            WHERE party_id = ? \
            ORDER BY joined_at, rowid",
        );
        let rows = self.connection.fetch_all(stmt.bind(party)).await?;
        Ok(rows.iter().map(member_from_row).collect())
    }
    async fn debit(&self, party: RowId, user: &str, amount: Cents) -> LedgerResult<Cents> {
        let mut conn = self.connection.acquire().await?;
        let balance = debit_on(&mut conn, party, user, amount).await?;
        trace!("Debited {} cents from {} in party {}", amount, user, party);
        Ok(balance)
    }
    async fn credit(&self, party: RowId, user: &str, amount: Cents) -> LedgerResult<Cents> {
        let mut conn = self.connection.acquire().await?;
        let balance = credit_on(&mut conn, party, user, amount).await?;
        trace!("Credited {} cents to {} in party {}", amount, user, party);
        Ok(balance)
    }
    async fn create_prop(&self, prop: NewProp) -> LedgerResult<Prop> {
        let created_at = now();
        let id = self
            .connection
            .execute(
                query(
                    "INSERT INTO props (\
                    party_id,\
                    creator,\
                    title,\
                    description,\
                    option1,\
                    odds1,\
                    option2,\
                    odds2,\
                    created_at) \
                    VALUES (?,?,?,?,?,?,?,?,?)",
                )
                .bind(prop.party)
                .bind(&prop.creator)
                .bind(&prop.title)
                .bind(&prop.description)
                .bind(&prop.option1)
                .bind(prop.odds1)
                .bind(&prop.option2)
                .bind(prop.odds2)
                .bind(created_at),
            )
            .await
            .map_err(map_prop_write_err)?
            .last_insert_rowid();
        Ok(Prop {
            id,
            party: prop.party,
            creator: prop.creator,
            title: prop.title,
            description: prop.description,
            option1: prop.option1,
            odds1: prop.odds1,
            option2: prop.option2,
            odds2: prop.odds2,
            wager_count: 0,
            created_at: timestamp(created_at),
            resolved_at: None,
            winning_choice: None,
        })
    }
    async fn get_prop(&self, prop: RowId) -> LedgerResult<Prop> {
        self.connection
            .fetch_optional(query("SELECT * FROM props WHERE id = ?").bind(prop))
            .await?
            .map(|row| prop_from_row(&row))
            .ok_or(LedgerError::PropNotFound(prop))
    }
    async fn list_props(&self, party: RowId) -> LedgerResult<Vec<Prop>> {
        let stmt = query("SELECT * FROM props WHERE party_id = ? ORDER BY created_at, id");
        let rows = self.connection.fetch_all(stmt.bind(party)).await?;
        Ok(rows.iter().map(prop_from_row).collect())
    }
    async fn edit_prop(&self, prop: RowId, edit: &PropEdit) -> LedgerResult<Prop> {
        let row = self
            .connection
            .fetch_optional(
                query(
                    "UPDATE props SET \
                    title = COALESCE(?, title), \
                    description = COALESCE(?, description), \
                    option1 = COALESCE(?, option1), \
                    odds1 = COALESCE(?, odds1), \
                    option2 = COALESCE(?, option2), \
                    odds2 = COALESCE(?, odds2) \
                    WHERE id = ? AND resolved_at IS NULL \
                    AND (wager_count = 0 OR (\
                        (? IS NULL OR ? = option1) AND (? IS NULL OR ? = option2))) \
                    RETURNING *",
                )
                .bind(&edit.title)
                .bind(&edit.description)
                .bind(&edit.option1)
                .bind(edit.odds1)
                .bind(&edit.option2)
                .bind(edit.odds2)
                .bind(prop)
                .bind(&edit.option1)
                .bind(&edit.option1)
                .bind(&edit.option2)
                .bind(&edit.option2),
            )
            .await
            .map_err(map_prop_write_err)?;
        if let Some(row) = row {
            return Ok(prop_from_row(&row));
        }
        // wagers hold the option names as their choice
        let current = self.get_prop(prop).await?;
        if current.is_resolved() {
            Err(LedgerError::PropResolved(prop))
        } else {
            Err(LedgerError::InvalidProp("options are locked once wagered on"))
        }
    }
    async fn mark_resolved(&self, prop: RowId, winning_choice: &str) -> LedgerResult<Prop> {
        let row = self
            .connection
            .fetch_optional(
                query(
                    "UPDATE props SET \
                    resolved_at = ?, \
                    winning_choice = ? \
                    WHERE id = ? AND resolved_at IS NULL AND (option1 = ? OR option2 = ?) \
                    RETURNING *",
                )
                .bind(now())
                .bind(winning_choice)
                .bind(prop)
                .bind(winning_choice)
                .bind(winning_choice),
            )
            .await?;
        if let Some(row) = row {
            return Ok(prop_from_row(&row));
        }
        let current = self.get_prop(prop).await?;
        if current.is_resolved() {
            Err(LedgerError::AlreadyResolved(prop))
        } else {
            Err(LedgerError::InvalidChoice(winning_choice.to_string()))
        }
    }
    async fn place_wager(
        &self,
        user: &str,
        prop: RowId,
        choice: &str,
        stake: Cents,
    ) -> LedgerResult<Wager> {
        let mut tx = self.connection.begin().await?;
        // Taking the write lock on an open prop first serializes placement
        // with mark_resolved: once the prop is frozen this matches nothing.
        let frozen = query(
            "UPDATE props SET wager_count = wager_count + 1 \
            WHERE id = ? AND resolved_at IS NULL \
            RETURNING *",
        )
        .bind(prop)
        .fetch_optional(&mut *tx)
        .await?;
        let current = match frozen {
            Some(row) => prop_from_row(&row),
            None => {
                let exists = query("SELECT 1 FROM props WHERE id = ?")
                    .bind(prop)
                    .fetch_optional(&mut *tx)
                    .await?;
                return Err(match exists {
                    Some(_) => LedgerError::PropResolved(prop),
                    None => LedgerError::PropNotFound(prop),
                });
            }
        };
        let party = current.party;
        let odds = current
            .odds_for(choice)
            .ok_or_else(|| LedgerError::InvalidChoice(choice.to_string()))?;
        debit_on(&mut tx, party, user, stake).await?;
        let placed_at = now();
        let id = query(
            "INSERT INTO wagers (\
            party_id,\
            prop_id,\
            user_id,\
            choice,\
            odds,\
            stake_cents,\
            placed_at,\
            status) \
            VALUES (?,?,?,?,?,?,?,?)",
        )
        .bind(party)
        .bind(prop)
        .bind(user)
        .bind(choice)
        .bind(odds)
        .bind(stake)
        .bind(placed_at)
        .bind(WagerStatus::Active.to_string())
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();
        tx.commit().await?;
        Ok(Wager {
            id,
            party,
            prop,
            user: user.to_string(),
            choice: choice.to_string(),
            odds,
            stake: from_cents(stake),
            placed_at: timestamp(placed_at),
            status: WagerStatus::Active,
        })
    }
    async fn list_active_wagers(&self, prop: RowId) -> LedgerResult<Vec<Wager>> {
        let stmt = query("SELECT * FROM wagers WHERE prop_id = ? AND status = ? ORDER BY id");
        let rows = self
            .connection
            .fetch_all(stmt.bind(prop).bind(WagerStatus::Active.to_string()))
            .await?;
        rows.iter().map(wager_from_row).collect()
    }
    async fn list_member_wagers(&self, party: RowId, user: &str) -> LedgerResult<Vec<Wager>> {
        let stmt = query(
            "SELECT * FROM wagers \
            WHERE party_id = ? AND user_id = ? \
            ORDER BY placed_at DESC, id DESC",
        );
        let rows = self.connection.fetch_all(stmt.bind(party).bind(user)).await?;
        rows.iter().map(wager_from_row).collect()
    }
    async fn settle_wager(&self, wager: &Wager, outcome: WagerOutcome) -> LedgerResult<bool> {
        let status = match outcome {
            WagerOutcome::Win { .. } => WagerStatus::Win,
            WagerOutcome::Loss => WagerStatus::Loss,
        };
        let mut tx = self.connection.begin().await?;
        let updated = query("UPDATE wagers SET status = ? WHERE id = ? AND status = ?")
            .bind(status.to_string())
            .bind(wager.id)
            .bind(WagerStatus::Active.to_string())
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if updated == 0 {
            return Ok(false);
        }
        if let WagerOutcome::Win { payout } = outcome {
            credit_on(&mut tx, wager.party, &wager.user, payout).await?;
        }
        tx.commit().await?;
        Ok(true)
    }
}
