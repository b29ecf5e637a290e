// Property-based tests for the pure request mapping
//
// The gateway payload builder carries all fixed wire values: transaction
// type, billing country, memo field name, and the hosted page display
// settings. These must hold for every input.

use hostedpay::gateways::{build_hosted_page_request, HostedPageRequest, MerchantCredentials};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

fn credentials() -> MerchantCredentials {
    MerchantCredentials::new("login-id", "txn-key")
}

fn to_wire(request: &HostedPageRequest) -> Value {
    serde_json::to_value(build_hosted_page_request(request, &credentials())).unwrap()
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z '-]{0,19}"
}

fn request_strategy() -> impl Strategy<Value = HostedPageRequest> {
    (
        1u64..10_000_000u64,
        0u32..=4u32,
        name_strategy(),
        name_strategy(),
        proptest::option::of("[0-9]{5}"),
        proptest::option::of("[ -~]{1,40}"),
    )
        .prop_map(|(cents, scale, first_name, last_name, zip, memo)| HostedPageRequest {
            amount: Decimal::new(cents as i64, scale),
            first_name,
            last_name,
            zip,
            memo: memo.unwrap_or_else(|| "none".to_string()),
        })
}

proptest! {
    #[test]
    fn test_billing_country_is_always_usa(request in request_strategy()) {
        let wire = to_wire(&request);

        prop_assert_eq!(
            &wire["getHostedPaymentPageRequest"]["transactionRequest"]["billTo"]["country"],
            &json!("USA")
        );
    }

    #[test]
    fn test_transaction_type_is_always_auth_capture(request in request_strategy()) {
        let wire = to_wire(&request);

        prop_assert_eq!(
            &wire["getHostedPaymentPageRequest"]["transactionRequest"]["transactionType"],
            &json!("authCaptureTransaction")
        );
    }

    #[test]
    fn test_memo_is_carried_in_the_single_user_field(request in request_strategy()) {
        let wire = to_wire(&request);
        let user_fields =
            &wire["getHostedPaymentPageRequest"]["transactionRequest"]["userFields"]["userField"];

        prop_assert_eq!(user_fields.as_array().unwrap().len(), 1);
        prop_assert_eq!(&user_fields[0]["name"], &json!("Memo"));
        prop_assert_eq!(&user_fields[0]["value"], &json!(request.memo.clone()));
    }

    #[test]
    fn test_settings_are_constant_for_all_requests(request in request_strategy()) {
        let wire = to_wire(&request);
        let settings = wire["getHostedPaymentPageRequest"]["hostedPaymentSettings"]["setting"]
            .as_array()
            .unwrap()
            .clone();

        prop_assert_eq!(settings.len(), 4);
        prop_assert_eq!(&settings[0]["settingName"], &json!("hostedPaymentButtonOptions"));
        prop_assert_eq!(&settings[1]["settingName"], &json!("hostedPaymentOrderOptions"));
        prop_assert_eq!(
            &settings[2]["settingName"],
            &json!("hostedPaymentBillingAddressOptions")
        );
        prop_assert_eq!(
            &settings[3]["settingName"],
            &json!("hostedPaymentShippingAddressOptions")
        );
    }

    #[test]
    fn test_names_pass_through_unchanged(request in request_strategy()) {
        let wire = to_wire(&request);
        let bill_to = &wire["getHostedPaymentPageRequest"]["transactionRequest"]["billTo"];

        prop_assert_eq!(&bill_to["firstName"], &json!(request.first_name.clone()));
        prop_assert_eq!(&bill_to["lastName"], &json!(request.last_name.clone()));
    }
}

#[test]
fn test_full_wire_shape_for_fixed_input() {
    let request = HostedPageRequest {
        amount: dec!(25.50),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        zip: Some("90210".to_string()),
        memo: "order 7".to_string(),
    };

    let wire = to_wire(&request);

    assert_eq!(
        wire,
        json!({
            "getHostedPaymentPageRequest": {
                "merchantAuthentication": {
                    "name": "login-id",
                    "transactionKey": "txn-key"
                },
                "transactionRequest": {
                    "transactionType": "authCaptureTransaction",
                    "amount": "25.50",
                    "billTo": {
                        "firstName": "Jane",
                        "lastName": "Doe",
                        "zip": "90210",
                        "country": "USA"
                    },
                    "userFields": {
                        "userField": [
                            {"name": "Memo", "value": "order 7"}
                        ]
                    }
                },
                "hostedPaymentSettings": {
                    "setting": [
                        {"settingName": "hostedPaymentButtonOptions", "settingValue": "{\"text\": \"Pay\"}"},
                        {"settingName": "hostedPaymentOrderOptions", "settingValue": "{\"show\": false}"},
                        {"settingName": "hostedPaymentBillingAddressOptions", "settingValue": "{\"show\": true}"},
                        {"settingName": "hostedPaymentShippingAddressOptions", "settingValue": "{\"show\": false}"}
                    ]
                }
            }
        })
    );
}

#[test]
fn test_zip_is_omitted_when_absent() {
    let request = HostedPageRequest {
        amount: dec!(10),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        zip: None,
        memo: "none".to_string(),
    };

    let wire = to_wire(&request);
    let bill_to = &wire["getHostedPaymentPageRequest"]["transactionRequest"]["billTo"];

    assert!(bill_to.get("zip").is_none());
}
