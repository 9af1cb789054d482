//! Briefing prompt — renders a record snapshot into the advisor prompt.

use crate::record::ClientRecord;

/// Build the briefing prompt for a record snapshot.
///
/// Inert fields follow the record's governing flags: no spouse renders as
/// "No", no entities as "None", whatever stale values the fields hold.
pub fn briefing_prompt(record: &ClientRecord) -> String {
    let spouse = if record.has_spouse {
        format!(
            "Yes ({}). Doing return: {}",
            record.spouse_name, record.spouse_doing_return
        )
    } else {
        "No".to_string()
    };

    let entities = if record.has_entities {
        record
            .entities
            .iter()
            .map(|e| {
                format!(
                    "{}: {} (ABN: {})",
                    e.kind.to_string().to_uppercase(),
                    e.name,
                    e.registration_number
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        "None".to_string()
    };

    format!(
        "You are a high-end Australian financial advisor and tax accountant's assistant.\n\
         Based on the following client data, provide a professional summary:\n\
         \n\
         Client Profile:\n\
         - Name: {first} {last}\n\
         - Spouse: {spouse}\n\
         - Entities: {entities}\n\
         - Annual Income: ${salary}\n\
         - Super Balance: ${super_balance}\n\
         - Total Assets: ${assets}\n\
         - Investments: Interest: {interest}, Dividends: {dividends}, Rental: {rental}\n\
         - Primary Goal: {goal}\n\
         \n\
         Instructions:\n\
         1. Provide an \"Executive Summary\" focusing on the complexity of their structure.\n\
         2. Identify \"Strategic Opportunities\" (e.g., income splitting if spouse is involved, \
         trust distribution benefits, or SMSF strategies).\n\
         3. List \"Compliance Requirements\" for the identified entities.\n\
         4. Suggest \"Next Steps\" for a discovery meeting.\n\
         \n\
         Return the response in structured Markdown format. Be sophisticated, neutral, and \
         high-value. Do not mention any brand names.",
        first = record.first_name,
        last = record.last_name,
        salary = record.annual_salary,
        super_balance = record.super_balance,
        assets = record.total_assets,
        interest = record.has_interest_income,
        dividends = record.has_dividends,
        rental = record.has_rental_property,
        goal = record.primary_goal,
    )
}
