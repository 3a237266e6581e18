//! Example documents demonstrating the wire format.
//!
//! Shared by the unit tests here and the gateway round-trip tests.

use serde_json::{json, Value};

/// A complete purchase order with every optional subtree present.
#[must_use]
pub fn example_purchase_order() -> Value {
    json!({
        "orderId": "4500982137",
        "buyer": {
            "primaryId": "3014260114400",
            "contact": [
                {
                    "contactTypeCode": "BJ",
                    "departmentName": "Supply Planning"
                }
            ]
        },
        "supplier": {
            "primaryId": "3760154220008",
            "address": {
                "name": "Fareva Amboise",
                "city": "Poce-sur-Cisse",
                "countryCode": "FR",
                "postalCode": "37530",
                "streetAddressOne": "Zone Industrielle 12 rue Bout des Bordes",
                "languageOfThePartyCode": "fr"
            }
        },
        "billTo": {
            "primaryId": "3014260114417",
            "address": {
                "name": "Central Accounts Payable",
                "city": "Lyon",
                "countryCode": "FR",
                "postalCode": "69007",
                "streetAddressOne": "45 Avenue Tony Garnier",
                "languageOfThePartyCode": "fr"
            }
        },
        "orderLogisticalInformation": {
            "shipTo": {
                "primaryId": "3014260114424",
                "address": {
                    "name": "Distribution Centre North",
                    "city": "Lille",
                    "countryCode": "FR",
                    "postalCode": "59000",
                    "streetAddressOne": "8 Rue du Port",
                    "languageOfThePartyCode": "fr"
                }
            },
            "shipFrom": {
                "primaryId": "3760154220008"
            }
        },
        "orderTypeCode": "220",
        "totalMonetaryAmountIncludingTaxes": {
            "value": 187250,
            "currencyCode": "EUR"
        },
        "orderSubType": "REGULAR",
        "lineItem": [
            {
                "lineItemNumber": 10,
                "itemFamily": "DERMO",
                "lineStatus": "ACTIVE",
                "lineItemDetail": [
                    {
                        "scheduleNumber": "0001",
                        "requestedQuantity": {
                            "value": 720.5,
                            "measurementUnitCode": "KGM"
                        },
                        "orderLogisticalInformation": {
                            "orderLogisticalDateInformation": {
                                "requestedDeliveryDateTime": {
                                    "date": "2024-06-14"
                                }
                            }
                        }
                    }
                ],
                "netPrice": {
                    "value": 1250
                },
                "requestedQuantity": {
                    "value": 1440,
                    "measurementUnitCode": "EA"
                },
                "transactionalTradeItem": {
                    "primaryId": "03401560023456"
                },
                "orderLogisticalInformation": {
                    "shipTo": {
                        "primaryId": "3014260114424"
                    },
                    "shipFrom": {
                        "primaryId": "3760154220008"
                    },
                    "orderLogisticalDateInformation": {
                        "requestedShipDateTime": {
                            "date": "2024-06-10"
                        },
                        "requestedDeliveryDateTime": {
                            "date": "2024-06-14"
                        }
                    }
                },
                "totalReceivedQuantity": {
                    "value": 0.0,
                    "measurementUnitCode": "KGM"
                }
            }
        ],
        "avpList": [
            {
                "name": "plantCode",
                "value": "FR02"
            },
            {
                "name": "priority",
                "value": "standard"
            }
        ]
    })
}

/// A valid purchase order with every optional subtree absent.
#[must_use]
pub fn minimal_purchase_order() -> Value {
    json!({
        "orderId": "4500990001",
        "buyer": {
            "primaryId": "3014260114400",
            "contact": []
        },
        "supplier": {
            "primaryId": "3760154220008",
            "address": {
                "name": "Fareva Amboise",
                "city": "Poce-sur-Cisse",
                "countryCode": "FR",
                "postalCode": "37530",
                "streetAddressOne": "Zone Industrielle 12 rue Bout des Bordes",
                "languageOfThePartyCode": "fr"
            }
        },
        "billTo": {
            "primaryId": "3014260114417",
            "address": {
                "name": "Central Accounts Payable",
                "city": "Lyon",
                "countryCode": "FR",
                "postalCode": "69007",
                "streetAddressOne": "45 Avenue Tony Garnier",
                "languageOfThePartyCode": "fr"
            }
        },
        "orderLogisticalInformation": {
            "shipTo": {
                "primaryId": "3014260114424",
                "address": {
                    "name": "Distribution Centre North",
                    "city": "Lille",
                    "countryCode": "FR",
                    "postalCode": "59000",
                    "streetAddressOne": "8 Rue du Port",
                    "languageOfThePartyCode": "fr"
                }
            },
            "shipFrom": {
                "primaryId": "3760154220008"
            }
        },
        "orderTypeCode": "220",
        "totalMonetaryAmountIncludingTaxes": {
            "value": 52000,
            "currencyCode": "EUR"
        },
        "orderSubType": "REGULAR",
        "lineItem": [
            {
                "lineItemNumber": 10,
                "itemFamily": "DERMO",
                "lineStatus": "ACTIVE",
                "netPrice": {
                    "value": 650
                },
                "requestedQuantity": {
                    "value": 80,
                    "measurementUnitCode": "EA"
                },
                "transactionalTradeItem": {
                    "primaryId": "03401560023456"
                },
                "orderLogisticalInformation": {
                    "shipTo": {
                        "primaryId": "3014260114424"
                    },
                    "shipFrom": {
                        "primaryId": "3760154220008"
                    },
                    "orderLogisticalDateInformation": {
                        "requestedShipDateTime": {
                            "date": "2024-07-01"
                        },
                        "requestedDeliveryDateTime": {
                            "date": "2024-07-05"
                        }
                    }
                }
            }
        ],
        "avpList": []
    })
}

/// An arbitrary load plan. Load plans carry no declared schema and are
/// relayed as received.
#[must_use]
pub fn example_load_plan() -> Value {
    json!({
        "loadPlanId": "LP-2024-1187",
        "carrier": "LCT",
        "stops": [
            { "sequence": 1, "location": "3760154220008", "action": "pickup" },
            { "sequence": 2, "location": "3014260114424", "action": "delivery" }
        ],
        "pallets": 26,
        "notes": null
    })
}
