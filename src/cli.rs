use anyhow::{Context, Result};
use api::*;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncWriteExt},
};

use crate::client::Client;

mod api;
mod client;

const USER_FILE: &str = "propbook_user";

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, default_value = "http://127.0.0.1:8081")]
    url: String,
    /// Act as this user instead of the one stored by `login`
    #[arg(long = "as")]
    as_user: Option<UserId>,
}
#[derive(Subcommand)]
enum Commands {
    /// Remembers the user id sent along with requests
    Login {
        user: UserId,
    },
    CreateParty {
        #[arg(long)]
        name: String,
        #[arg(long)]
        starting_balance: Decimal,
    },
    JoinParty {
        join_code: String,
    },
    LeaveParty {
        party: RowId,
    },
    DeleteParty {
        party: RowId,
    },
    GetParty {
        party: RowId,
    },
    GetParties,
    CreateProp {
        #[arg(long)]
        party: RowId,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        option1: String,
        #[arg(long, allow_hyphen_values = true)]
        odds1: AmericanOdds,
        #[arg(long)]
        option2: String,
        #[arg(long, allow_hyphen_values = true)]
        odds2: AmericanOdds,
    },
    EditProp {
        prop: RowId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        option1: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        odds1: Option<AmericanOdds>,
        #[arg(long)]
        option2: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        odds2: Option<AmericanOdds>,
    },
    GetProp {
        prop: RowId,
    },
    GetProps {
        party: RowId,
    },
    PlaceWager {
        #[arg(long)]
        prop: RowId,
        #[arg(long)]
        choice: String,
        #[arg(long)]
        stake: Decimal,
    },
    ResolveProp {
        #[arg(long)]
        prop: RowId,
        #[arg(long)]
        winner: String,
    },
    ResettleProp {
        prop: RowId,
    },
    GetBalance {
        party: RowId,
    },
    GetLeaderboard {
        party: RowId,
    },
    GetWagers {
        party: RowId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Args::parse();
    let client = Client::new(cli.url);
    let user = cli.as_user;

    match cli.command {
        Commands::Login { user } => {
            let mut file = File::create(USER_FILE).await?;
            file.write_all(user.as_bytes()).await?;
            println!("Acting as {}", user);
        }
        Commands::CreateParty {
            name,
            starting_balance,
        } => {
            let request = CreatePartyRequest {
                name,
                starting_balance,
            };
            let party = client
                .create_party(&current_user(user).await?, request)
                .await?;
            println!("Created party {}, join code {}", party.id, party.join_code);
        }
        Commands::JoinParty { join_code } => {
            let member = client
                .join_party(&current_user(user).await?, JoinPartyRequest { join_code })
                .await?;
            println!(
                "Joined party {} with a balance of {}",
                member.party, member.balance
            );
        }
        Commands::LeaveParty { party } => {
            client.leave_party(&current_user(user).await?, party).await?;
        }
        Commands::DeleteParty { party } => {
            client.delete_party(&current_user(user).await?, party).await?;
        }
        Commands::GetParty { party } => {
            print_json(&client.get_party(party).await?)?;
        }
        Commands::GetParties => {
            print_json(&client.get_parties(&current_user(user).await?).await?)?;
        }
        Commands::CreateProp {
            party,
            title,
            description,
            option1,
            odds1,
            option2,
            odds2,
        } => {
            let request = CreatePropRequest {
                party,
                title,
                description,
                option1,
                odds1,
                option2,
                odds2,
            };
            let prop = client
                .create_prop(&current_user(user).await?, request)
                .await?;
            println!("Created prop {}", prop.id);
        }
        Commands::EditProp {
            prop,
            title,
            description,
            option1,
            odds1,
            option2,
            odds2,
        } => {
            let request = EditPropRequest {
                prop,
                edit: PropEdit {
                    title,
                    description,
                    option1,
                    odds1,
                    option2,
                    odds2,
                },
            };
            print_json(&client.edit_prop(&current_user(user).await?, request).await?)?;
        }
        Commands::GetProp { prop } => {
            print_json(&client.get_prop(prop).await?)?;
        }
        Commands::GetProps { party } => {
            print_json(&client.get_props(party).await?)?;
        }
        Commands::PlaceWager {
            prop,
            choice,
            stake,
        } => {
            let request = PlaceWagerRequest {
                prop,
                choice,
                stake,
            };
            let wager = client
                .place_wager(&current_user(user).await?, request)
                .await?;
            println!(
                "Placed wager {}: {} on {} at {}",
                wager.id, wager.stake, wager.choice, wager.odds
            );
        }
        Commands::ResolveProp { prop, winner } => {
            let request = ResolvePropRequest {
                prop,
                winning_choice: winner,
            };
            let report = client
                .resolve_prop(&current_user(user).await?, request)
                .await?;
            print_json(&report)?;
        }
        Commands::ResettleProp { prop } => {
            let report = client
                .resettle_prop(&current_user(user).await?, prop)
                .await?;
            print_json(&report)?;
        }
        Commands::GetBalance { party } => {
            let balance = client
                .get_balance(party, &current_user(user).await?)
                .await?;
            println!("{}", balance.balance);
        }
        Commands::GetLeaderboard { party } => {
            let leaderboard = client
                .get_leaderboard(&current_user(user).await?, party)
                .await?;
            for entry in leaderboard {
                let marker = if entry.is_current { "*" } else { " " };
                println!(
                    "{}{:>5} {:<20} {:>12}",
                    marker,
                    entry.display_rank(),
                    entry.user,
                    entry.balance
                );
            }
        }
        Commands::GetWagers { party } => {
            let wagers = client
                .get_wagers(party, &current_user(user).await?)
                .await?;
            print_json(&wagers)?;
        }
    }
    Ok(())
}
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
async fn current_user(user: Option<UserId>) -> Result<UserId> {
    if let Some(user) = user {
        return Ok(user);
    }
    let mut file = File::open(USER_FILE)
        .await
        .context("no user given, run `login` or pass --as")?;
    let mut contents = vec![];
    file.read_to_end(&mut contents).await?;
    Ok(String::from_utf8(contents)?.trim().to_string())
}
