use anyhow::Result;

use angebot_core::CustomerId;
use angebot_customers::Customer;

use super::Context;
use crate::cli::{CustomerArgs, CustomerCommands};

pub async fn run(ctx: &Context, action: &CustomerCommands) -> Result<()> {
    let client = ctx.client();
    match action {
        CustomerCommands::List => {
            let customers = client.list_customers().await?;
            if customers.is_empty() {
                println!("Noch keine Kunden.");
            }
            for c in &customers {
                let id = c.id.map(|id| id.to_string()).unwrap_or_default();
                println!("#{id:<5} {}", c.label());
            }
        }
        CustomerCommands::Show { id } => print_customer(&client.get_customer(*id).await?),
        CustomerCommands::Add { fields } => {
            let customer = apply(Customer::default(), fields);
            let created = client.create_customer(&customer).await?;
            print_saved("angelegt", created.id);
        }
        CustomerCommands::Update { id, fields } => {
            let current = client.get_customer(*id).await?;
            let updated = client.update_customer(*id, &apply(current, fields)).await?;
            print_saved("gespeichert", updated.id.or(Some(*id)));
        }
        CustomerCommands::Delete { id } => {
            client.delete_customer(*id).await?;
            println!("Kunde #{id} gelöscht.");
        }
    }
    Ok(())
}

fn apply(mut customer: Customer, args: &CustomerArgs) -> Customer {
    let fields = [
        (&mut customer.first_name, &args.first_name),
        (&mut customer.last_name, &args.last_name),
        (&mut customer.email, &args.email),
        (&mut customer.phone, &args.phone),
        (&mut customer.home_street, &args.home_street),
        (&mut customer.home_house_nr, &args.home_house_nr),
        (&mut customer.home_plz, &args.home_plz),
        (&mut customer.home_ort, &args.home_ort),
        (&mut customer.work_street, &args.work_street),
        (&mut customer.work_house_nr, &args.work_house_nr),
        (&mut customer.work_plz, &args.work_plz),
        (&mut customer.work_ort, &args.work_ort),
    ];
    for (slot, value) in fields {
        if let Some(value) = value {
            *slot = value.trim().to_string();
        }
    }
    customer
}

fn print_saved(verb: &str, id: Option<CustomerId>) {
    match id {
        Some(id) => println!("Kunde #{id} {verb}."),
        None => println!("Kunde {verb}."),
    }
}

fn print_customer(c: &Customer) {
    println!("{}", c.full_name());
    println!("  E-Mail:  {}", c.email);
    if !c.phone.trim().is_empty() {
        println!("  Telefon: {}", c.phone);
    }
    let home = c.home_address();
    if !home.is_empty() {
        println!("  Privat:  {home}");
    }
    let work = c.work_address();
    if !work.is_empty() {
        println!("  Arbeit:  {work}");
    }
}
